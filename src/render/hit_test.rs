//! Mapping of pointer and keyboard input back to grid cells.

use serde::{Deserialize, Serialize};

use crate::diagram::Cell;
use crate::render::scene::Scene;

/// Raw user input aimed at the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// Click or tap at canvas coordinates.
    Pointer { x: f64, y: f64 },
    /// Key press while the square of `target` has focus.
    Key { target: Cell, key: String },
}

/// Keys that activate a focused square.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ") || key.eq_ignore_ascii_case("enter") || key.eq_ignore_ascii_case("space")
}

/// Cell the activation lands on, or `None` if it misses every square or
/// uses a key that does nothing.
pub fn resolve(scene: &Scene, activation: &Activation) -> Option<Cell> {
    match activation {
        Activation::Pointer { x, y } => scene.hit_test(*x, *y),
        Activation::Key { target, key } => {
            (is_activation_key(key) && scene.is_focusable(*target)).then_some(*target)
        }
    }
}
