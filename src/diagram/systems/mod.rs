pub mod placement;
pub mod markers;

pub use placement::*;
pub use markers::*;
