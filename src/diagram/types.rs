use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::palette::{
    DEFAULT_CHECKER_DARK, DEFAULT_CHECKER_LIGHT, DEFAULT_OBJECT_COLOR, DEFAULT_STROKE_COLOR,
};
use crate::error::DiagramError;

/// A grid position, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Four-connected neighbours only: exactly one axis differs, by one.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A CSS hex color, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Accepts `#rgb` and `#rrggbb`.
    pub fn parse(raw: &str) -> Result<Color, DiagramError> {
        let trimmed = raw.trim();
        let valid = trimmed
            .strip_prefix('#')
            .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);
        if !valid {
            return Err(DiagramError::InvalidColor(raw.to_string()));
        }
        Ok(Color(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Only for the compiled-in defaults, which are covered by a test.
    fn builtin(hex: &str) -> Color {
        Color(hex.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = DiagramError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// A domino covering two adjacent cells.
///
/// Tiles can only be built through [`Tile::new`], so the two cells are always
/// distinct and adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    cells: [Cell; 2],
    color: Color,
}

impl Tile {
    /// Returns `None` unless `a` and `b` are adjacent.
    pub fn new(a: Cell, b: Cell, color: Color) -> Option<Tile> {
        if !a.is_adjacent(b) {
            return None;
        }
        Some(Tile { cells: [a, b], color })
    }

    pub fn cells(&self) -> [Cell; 2] {
        self.cells
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn covers(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Both cells share a column.
    pub fn is_vertical(&self) -> bool {
        self.cells[0].col == self.cells[1].col
    }

    /// Top-left cell of the tile.
    pub fn origin(&self) -> Cell {
        let [a, b] = self.cells;
        Cell::new(a.row.min(b.row), a.col.min(b.col))
    }
}

/// An "X" annotation on a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub cell: Cell,
    pub color: Color,
}

/// How a cell activation is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Tile,
    Marker,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Tile => f.write_str("tile"),
            Mode::Marker => f.write_str("marker"),
        }
    }
}

/// Current colors. `object` is copied into each new tile or marker; the
/// others are read at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub object: Color,
    pub stroke: Color,
    pub checker_light: Color,
    pub checker_dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            object: Color::builtin(DEFAULT_OBJECT_COLOR),
            stroke: Color::builtin(DEFAULT_STROKE_COLOR),
            checker_light: Color::builtin(DEFAULT_CHECKER_LIGHT),
            checker_dark: Color::builtin(DEFAULT_CHECKER_DARK),
        }
    }
}
