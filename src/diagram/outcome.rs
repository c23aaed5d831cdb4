//! Results of cell activations.
//!
//! Rejected input is reported as a [`Warning`] value rather than an error:
//! the model is left untouched and the session turns it into a failure
//! status message.

use serde::Serialize;

use crate::diagram::types::{Cell, Marker, Tile};

/// Non-fatal reasons an activation did not change the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// The cell is covered by a tile or a marker.
    Occupied(Cell),
    /// The cell is already the pending first square.
    AlreadySelected(Cell),
    /// A marker cannot go on a tile-covered cell.
    CannotPlace(Cell),
    /// The cell lies outside the grid.
    OutOfBounds(Cell),
    /// The two cells of a tile must touch along an edge.
    NotAdjacent(Cell, Cell),
}

impl Warning {
    pub fn code(&self) -> &'static str {
        match self {
            Warning::Occupied(_) => "OCCUPIED",
            Warning::AlreadySelected(_) => "ALREADY_SELECTED",
            Warning::CannotPlace(_) => "CANNOT_PLACE",
            Warning::OutOfBounds(_) => "OUT_OF_BOUNDS",
            Warning::NotAdjacent(_, _) => "NOT_ADJACENT",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Warning::Occupied(cell) => format!("Square {} is already occupied!", cell),
            Warning::AlreadySelected(cell) => {
                format!("Square {} is already selected, pick an adjacent square", cell)
            }
            Warning::CannotPlace(cell) => {
                format!("Cannot place a marker on square {}: it is covered by a tile", cell)
            }
            Warning::OutOfBounds(cell) => format!("Square {} is outside the grid", cell),
            Warning::NotAdjacent(a, b) => format!("Squares {} and {} are not adjacent", a, b),
        }
    }
}

/// What a single activation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// First square of a tile picked.
    Selected(Cell),
    /// A non-adjacent second square replaced the pending one.
    Reselected { previous: Cell, current: Cell },
    TilePlaced(Tile),
    MarkerAdded(Marker),
    MarkerRemoved(Cell),
    Warning(Warning),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Warning(_))
    }

    pub fn warning(&self) -> Option<Warning> {
        match self {
            Outcome::Warning(warning) => Some(*warning),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Outcome::Selected(_) => "SELECTED",
            Outcome::Reselected { .. } => "RESELECTED",
            Outcome::TilePlaced(_) => "TILE_PLACED",
            Outcome::MarkerAdded(_) => "MARKER_ADDED",
            Outcome::MarkerRemoved(_) => "MARKER_REMOVED",
            Outcome::Warning(warning) => warning.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Selected(cell) => format!("Selected square {}", cell),
            Outcome::Reselected { current, .. } => format!("Selected square {} instead", current),
            Outcome::TilePlaced(tile) => {
                let [a, b] = tile.cells();
                format!("Placed tile on {} and {}", a, b)
            }
            Outcome::MarkerAdded(marker) => format!("Placed marker on {}", marker.cell),
            Outcome::MarkerRemoved(cell) => format!("Removed marker from {}", cell),
            Outcome::Warning(warning) => warning.message(),
        }
    }
}

impl From<Warning> for Outcome {
    fn from(warning: Warning) -> Self {
        Outcome::Warning(warning)
    }
}
