//! Scene renderer: projection of the grid model, SVG export and hit testing.

pub mod scene;
pub mod renderer;
pub mod svg;
pub mod hit_test;
pub mod preview;

pub use hit_test::{resolve, Activation};
pub use renderer::SceneRenderer;
pub use scene::{Element, LayerKind, Scene};
pub use svg::{to_data_uri, to_svg};
