/// Default colors.
/// 
/// Object color is captured by tiles and markers when they are created,
/// stroke and checker colors are applied at render time.
pub const DEFAULT_OBJECT_COLOR: &str = "#4caf50";

/// Outline color shared by every tile.
pub const DEFAULT_STROKE_COLOR: &str = "#2e7d32";

/// Light checkerboard squares, `(row + col)` even.
pub const DEFAULT_CHECKER_LIGHT: &str = "#f0d9b5";

/// Dark checkerboard squares, `(row + col)` odd.
pub const DEFAULT_CHECKER_DARK: &str = "#b58863";

/// Fill of the selection overlay.
pub const SELECTION_COLOR: &str = "#ffeb3b";
