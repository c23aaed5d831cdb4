/// Grid configuration constants.
/// 
/// This module defines the default grid dimensions and the geometry used when
/// projecting cells onto the drawing canvas.
pub const DEFAULT_GRID_WIDTH: usize = 8;

/// Default number of rows.
pub const DEFAULT_GRID_HEIGHT: usize = 8;

/// Largest accepted value for either grid dimension.
pub const MAX_GRID_DIMENSION: usize = 64;

/// Side length of one square, in canvas units.
pub const DEFAULT_CELL_SIZE: u32 = 50;

/// Corner radius of a tile rectangle.
pub const TILE_CORNER_RADIUS: u32 = 8;

/// Outline width of a tile rectangle.
pub const TILE_STROKE_WIDTH: u32 = 3;

/// Fraction of the cell covered by each arm of a marker cross.
pub const MARKER_SPAN: f64 = 0.6;

/// Line width of a marker cross.
pub const MARKER_STROKE_WIDTH: u32 = 3;

/// Opacity of the overlay drawn on the pending square.
pub const SELECTION_OPACITY: f64 = 0.35;
