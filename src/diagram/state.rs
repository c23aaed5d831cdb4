use log::{debug, info, warn};
use serde::Serialize;

use crate::diagram::grid::{in_bounds, validate_dimensions};
use crate::diagram::outcome::{Outcome, Warning};
use crate::diagram::systems::{create_tile, handle_tile_activation, toggle_marker};
use crate::diagram::types::{Cell, Color, Marker, Mode, Palette, Tile};
use crate::error::DiagramError;

/// Authoritative placement state of one diagram.
///
/// Invariant: no cell is covered by two tiles, or by a tile and a marker,
/// and there is at most one marker per cell.
#[derive(Debug, Clone, Serialize)]
pub struct GridModel {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) markers: Vec<Marker>,
    pub(crate) selection: Option<Cell>,
    pub(crate) mode: Mode,
    pub(crate) palette: Palette,
}

impl GridModel {
    // Crée une grille vide
    pub fn new(width: usize, height: usize, palette: Palette) -> Result<Self, DiagramError> {
        validate_dimensions(width, height)?;
        Ok(GridModel {
            width,
            height,
            tiles: Vec::new(),
            markers: Vec::new(),
            selection: None,
            mode: Mode::default(),
            palette,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The pending first square of a tile, if any.
    pub fn selection(&self) -> Option<Cell> {
        self.selection
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the grid size. Placements are dropped on success; on failure
    /// nothing changes.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), DiagramError> {
        if let Err(err) = validate_dimensions(width, height) {
            warn!("[GridModel] Rejected grid size {}x{}", width, height);
            return Err(err);
        }
        self.width = width;
        self.height = height;
        self.reset();
        info!("[GridModel] Grid resized to {}x{}", width, height);
        Ok(())
    }

    /// Drop every tile, marker and the pending selection. Colors are kept.
    pub fn reset(&mut self) {
        self.clear_placements();
        debug!("[GridModel] Reset");
    }

    /// Same effect as [`GridModel::reset`] but never tied to a resize.
    pub fn clear(&mut self) {
        self.clear_placements();
        debug!("[GridModel] Cleared tiles and markers");
    }

    fn clear_placements(&mut self) {
        self.tiles.clear();
        self.markers.clear();
        self.selection = None;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.selection = None;
        debug!("[GridModel] Mode set to {}", mode);
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        in_bounds(cell, self.width, self.height)
    }

    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.covers(cell))
    }

    pub fn marker_at(&self, cell: Cell) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.cell == cell)
    }

    /// True if any tile or marker covers `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.tile_at(cell).is_some() || self.marker_at(cell).is_some()
    }

    /// Interpret a click or key press on `cell` according to the current mode.
    pub fn handle_cell_activate(&mut self, cell: Cell) -> Outcome {
        if !self.in_bounds(cell) {
            warn!("[GridModel] Activation outside the grid at {}", cell);
            return Warning::OutOfBounds(cell).into();
        }
        let outcome = match self.mode {
            Mode::Tile => handle_tile_activation(self, cell),
            Mode::Marker => toggle_marker(self, cell),
        };
        debug!("[GridModel] activate {} -> {}", cell, outcome.code());
        outcome
    }

    pub fn toggle_marker(&mut self, cell: Cell) -> Outcome {
        toggle_marker(self, cell)
    }

    pub fn create_tile(&mut self, a: Cell, b: Cell) -> Outcome {
        create_tile(self, a, b)
    }

    pub fn set_object_color(&mut self, color: Color) {
        self.palette.object = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.palette.stroke = color;
    }

    pub fn set_checker_light(&mut self, color: Color) {
        self.palette.checker_light = color;
    }

    pub fn set_checker_dark(&mut self, color: Color) {
        self.palette.checker_dark = color;
    }

    pub fn set_checker_colors(&mut self, light: Color, dark: Color) {
        self.palette.checker_light = light;
        self.palette.checker_dark = dark;
    }
}
