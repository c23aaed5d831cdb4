//! Marker ("X") toggling.

use log::debug;

use crate::diagram::outcome::{Outcome, Warning};
use crate::diagram::state::GridModel;
use crate::diagram::types::{Cell, Marker};

/// Remove the marker on `cell` if there is one, otherwise add one with the
/// current object color. Tile-covered cells are refused.
pub fn toggle_marker(model: &mut GridModel, cell: Cell) -> Outcome {
    if !model.in_bounds(cell) {
        return Warning::OutOfBounds(cell).into();
    }

    if let Some(pos) = model.markers.iter().position(|m| m.cell == cell) {
        model.markers.remove(pos);
        debug!("[Markers] Removed marker at {}", cell);
        return Outcome::MarkerRemoved(cell);
    }

    if model.tile_at(cell).is_some() {
        return Warning::CannotPlace(cell).into();
    }

    // A marked square can no longer start a tile.
    if model.selection == Some(cell) {
        model.selection = None;
    }

    let marker = Marker { cell, color: model.palette.object.clone() };
    model.markers.push(marker.clone());
    debug!("[Markers] Added marker at {}", cell);
    Outcome::MarkerAdded(marker)
}
