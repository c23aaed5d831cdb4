//! Tile placement system.
//!
//! Two activations make a tile: the first picks a square (`Pending`), the
//! second either completes the tile, moves the selection, or is rejected.

use log::{debug, warn};

use crate::diagram::outcome::{Outcome, Warning};
use crate::diagram::state::GridModel;
use crate::diagram::types::{Cell, Tile};

/// Advance the Idle/Pending state machine with an activation on `cell`.
/// `cell` must already be in bounds.
pub fn handle_tile_activation(model: &mut GridModel, cell: Cell) -> Outcome {
    let Some(pending) = model.selection else {
        if model.is_occupied(cell) {
            warn!("[Placement] First square {} is occupied", cell);
            return Warning::Occupied(cell).into();
        }
        model.selection = Some(cell);
        return Outcome::Selected(cell);
    };

    // Rejected second clicks keep the pending square.
    if model.is_occupied(cell) {
        warn!("[Placement] Second square {} is occupied, keeping {}", cell, pending);
        return Warning::Occupied(cell).into();
    }
    if cell == pending {
        return Warning::AlreadySelected(cell).into();
    }

    if pending.is_adjacent(cell) {
        let outcome = create_tile(model, pending, cell);
        if outcome.is_success() {
            model.selection = None;
        }
        outcome
    } else {
        debug!("[Placement] {} not adjacent to {}, reselecting", cell, pending);
        model.selection = Some(cell);
        Outcome::Reselected { previous: pending, current: cell }
    }
}

/// Place a tile on `a` and `b` with the current object color.
/// Adjacency, bounds and occupancy are re-checked here. Covering the pending
/// square drops the selection.
pub fn create_tile(model: &mut GridModel, a: Cell, b: Cell) -> Outcome {
    for cell in [a, b] {
        if !model.in_bounds(cell) {
            return Warning::OutOfBounds(cell).into();
        }
    }
    let Some(tile) = Tile::new(a, b, model.palette.object.clone()) else {
        return Warning::NotAdjacent(a, b).into();
    };
    for cell in [a, b] {
        if model.is_occupied(cell) {
            return Warning::Occupied(cell).into();
        }
    }
    model.tiles.push(tile.clone());
    // A pending square must stay free.
    if model.selection.is_some_and(|pending| tile.covers(pending)) {
        model.selection = None;
    }
    debug!("[Placement] Tile placed on {} and {} ({} total)", a, b, model.tiles.len());
    Outcome::TilePlaced(tile)
}
