//! Grid geometry helpers.
//!
//! Dimension validation, bounds checks and cell enumeration shared by the
//! model and the renderer.

use crate::config::grid::MAX_GRID_DIMENSION;
use crate::diagram::types::Cell;
use crate::error::DiagramError;

/// Reject zero-sized or oversized grids.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), DiagramError> {
    let signed = |side: usize| i64::try_from(side).unwrap_or(i64::MAX);
    checked_dimensions(signed(width), signed(height)).map(|_| ())
}

/// Validate user-supplied sides, which may be negative.
pub fn checked_dimensions(width: i64, height: i64) -> Result<(usize, usize), DiagramError> {
    let side = |value: i64| {
        usize::try_from(value).ok().filter(|side| (1..=MAX_GRID_DIMENSION).contains(side))
    };
    match (side(width), side(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(DiagramError::InvalidDimension { width, height }),
    }
}

pub fn in_bounds(cell: Cell, width: usize, height: usize) -> bool {
    cell.row < height && cell.col < width
}

/// Whether two cells form a legal tile.
pub fn adjacent(a: Cell, b: Cell) -> bool {
    a.is_adjacent(b)
}

/// Every cell of a `width` x `height` grid, row by row.
pub fn cells(width: usize, height: usize) -> impl Iterator<Item = Cell> {
    (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
}

/// Light squares sit where `row + col` is even.
pub fn is_light(cell: Cell) -> bool {
    (cell.row + cell.col) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_excludes_diagonals_and_is_symmetric() {
        let origin = Cell::new(0, 0);
        assert!(adjacent(origin, Cell::new(0, 1)));
        assert!(adjacent(origin, Cell::new(1, 0)));
        assert!(!adjacent(origin, Cell::new(1, 1)));
        assert!(!adjacent(origin, origin));

        for a in cells(4, 4) {
            for b in cells(4, 4) {
                assert_eq!(adjacent(a, b), adjacent(b, a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn dimension_bounds() {
        assert!(validate_dimensions(1, 1).is_ok());
        assert!(validate_dimensions(MAX_GRID_DIMENSION, 8).is_ok());
        assert!(validate_dimensions(0, 8).is_err());
        assert!(validate_dimensions(8, 0).is_err());
        assert!(validate_dimensions(MAX_GRID_DIMENSION + 1, 8).is_err());

        assert_eq!(checked_dimensions(10, 6).unwrap(), (10, 6));
        let err = checked_dimensions(-1, 5).unwrap_err();
        assert_eq!(err.code(), "INVALID_DIMENSION");
        assert!(err.to_string().contains("-1x5"));
        assert!(checked_dimensions(4, i64::MIN).is_err());
    }

    #[test]
    fn cell_enumeration_is_row_major() {
        let all: Vec<Cell> = cells(3, 2).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Cell::new(0, 0));
        assert_eq!(all[2], Cell::new(0, 2));
        assert_eq!(all[3], Cell::new(1, 0));
        assert!(all.iter().all(|c| in_bounds(*c, 3, 2)));
        assert!(!in_bounds(Cell::new(2, 0), 3, 2));
        assert!(!in_bounds(Cell::new(0, 3), 3, 2));
    }

    #[test]
    fn checker_parity() {
        assert!(is_light(Cell::new(0, 0)));
        assert!(!is_light(Cell::new(0, 1)));
        assert!(is_light(Cell::new(1, 1)));
    }
}
