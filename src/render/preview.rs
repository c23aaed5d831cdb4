//! Terminal preview of a diagram.
//!
//! This module renders the grid as text for the interactive session.

use std::fmt::Write;

use crate::diagram::grid::is_light;
use crate::diagram::{Cell, GridModel};

/// One line per row, two characters per square.
pub fn preview(model: &GridModel) -> String {
    let mut out = String::new();
    for row in 0..model.height() {
        for col in 0..model.width() {
            let cell = Cell::new(row, col);
            // Selection first, then tiles, then markers.
            let symbol = if model.selection() == Some(cell) {
                "[]"
            } else if let Some(tile) = model.tile_at(cell) {
                if tile.is_vertical() { "||" } else { "==" }
            } else if model.marker_at(cell).is_some() {
                "XX"
            } else if is_light(cell) {
                ".."
            } else {
                "::"
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{}x{} | mode: {} | tiles: {} | markers: {}",
        model.width(),
        model.height(),
        model.mode(),
        model.tiles().len(),
        model.markers().len()
    );
    out
}
