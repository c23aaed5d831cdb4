//! Grid model: cells, tiles, markers and the placement rules.

pub mod types;
pub mod outcome;
pub mod grid;
pub mod state;
pub mod systems;

pub use outcome::{Outcome, Warning};
pub use state::GridModel;
pub use types::{Cell, Color, Marker, Mode, Palette, Tile};
