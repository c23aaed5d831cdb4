//! Projection of a [`GridModel`] into a [`Scene`].
//!
//! The checkerboard only depends on the grid size and the checker colors, so
//! it is cached and rebuilt when either changes. Tiles, markers and the
//! selection highlight are rebuilt on every call.

use log::debug;

use crate::config::grid::{
    MARKER_SPAN, MARKER_STROKE_WIDTH, SELECTION_OPACITY, TILE_CORNER_RADIUS, TILE_STROKE_WIDTH,
};
use crate::config::palette::SELECTION_COLOR;
use crate::diagram::grid::{cells, is_light};
use crate::diagram::{Cell, Color, GridModel, Marker, Tile};
use crate::render::scene::{Element, Group, Layer, LayerKind, Line, Paint, Rect, Scene};

/// Everything the checkerboard layer depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BackgroundKey {
    width: usize,
    height: usize,
    light: Color,
    dark: Color,
}

pub struct SceneRenderer {
    cell_size: u32,
    background: Option<(BackgroundKey, Layer)>,
    background_builds: usize,
}

impl SceneRenderer {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size: cell_size.max(1), background: None, background_builds: 0 }
    }

    /// How many times the checkerboard has been regenerated.
    pub fn background_builds(&self) -> usize {
        self.background_builds
    }

    /// Canvas coordinates to a cell of `model`, `None` outside the grid or
    /// for non-finite input.
    pub fn cell_at(&self, model: &GridModel, x: f64, y: f64) -> Option<Cell> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let size = self.cell_size as f64;
        let cell = Cell::new((y / size) as usize, (x / size) as usize);
        model.in_bounds(cell).then_some(cell)
    }

    /// Compute the full scene for the current model state.
    pub fn render(&mut self, model: &GridModel) -> Scene {
        let mut checkerboard = self.background_layer(model);
        if let Some(pending) = model.selection() {
            mark_selected(&mut checkerboard, pending);
        }

        let size = self.cell_size as f64;
        Scene {
            width: model.width() as f64 * size,
            height: model.height() as f64 * size,
            cell_size: self.cell_size,
            layers: vec![
                checkerboard,
                self.tile_layer(model),
                self.marker_layer(model),
                self.selection_layer(model),
            ],
        }
    }

    fn background_layer(&mut self, model: &GridModel) -> Layer {
        let palette = model.palette();
        let key = BackgroundKey {
            width: model.width(),
            height: model.height(),
            light: palette.checker_light.clone(),
            dark: palette.checker_dark.clone(),
        };
        if let Some((cached, layer)) = &self.background {
            if *cached == key {
                return layer.clone();
            }
        }
        let layer = self.build_checkerboard(&key);
        self.background_builds += 1;
        debug!(
            "[SceneRenderer] Checkerboard rebuilt for {}x{} (build #{})",
            key.width, key.height, self.background_builds
        );
        self.background = Some((key, layer.clone()));
        layer
    }

    fn build_checkerboard(&self, key: &BackgroundKey) -> Layer {
        let size = self.cell_size as f64;
        let mut layer = Layer::new(LayerKind::Checkerboard);
        for cell in cells(key.width, key.height) {
            let color = if is_light(cell) { &key.light } else { &key.dark };
            layer.elements.push(Element::Rect(Rect {
                x: cell.col as f64 * size,
                y: cell.row as f64 * size,
                width: size,
                height: size,
                corner_radius: None,
                paint: Paint { fill: Some(color.to_string()), ..Paint::default() },
                class: "square".to_string(),
                owner: Some(cell),
                interactive: true,
            }));
        }
        layer
    }

    fn tile_layer(&self, model: &GridModel) -> Layer {
        let stroke = model.palette().stroke.to_string();
        let mut layer = Layer::new(LayerKind::Tiles);
        layer.elements =
            model.tiles().iter().map(|tile| Element::Rect(self.tile_shape(tile, &stroke))).collect();
        layer
    }

    fn tile_shape(&self, tile: &Tile, stroke: &str) -> Rect {
        let size = self.cell_size as f64;
        let origin = tile.origin();
        let (width, height) = if tile.is_vertical() { (size, size * 2.0) } else { (size * 2.0, size) };
        Rect {
            x: origin.col as f64 * size,
            y: origin.row as f64 * size,
            width,
            height,
            corner_radius: Some(TILE_CORNER_RADIUS as f64),
            paint: Paint {
                fill: Some(tile.color().to_string()),
                stroke: Some(stroke.to_string()),
                stroke_width: Some(TILE_STROKE_WIDTH),
                opacity: None,
            },
            class: "tile".to_string(),
            owner: None,
            interactive: false,
        }
    }

    fn marker_layer(&self, model: &GridModel) -> Layer {
        let mut layer = Layer::new(LayerKind::Markers);
        layer.elements =
            model.markers().iter().map(|marker| Element::Group(self.marker_shape(marker))).collect();
        layer
    }

    fn marker_shape(&self, marker: &Marker) -> Group {
        let size = self.cell_size as f64;
        let center_x = marker.cell.col as f64 * size + size / 2.0;
        let center_y = marker.cell.row as f64 * size + size / 2.0;
        let half = size * MARKER_SPAN / 2.0;
        let paint = Paint {
            fill: None,
            stroke: Some(marker.color.to_string()),
            stroke_width: Some(MARKER_STROKE_WIDTH),
            opacity: None,
        };
        let arm = |sign: f64| {
            Element::Line(Line {
                x1: center_x - half,
                y1: center_y - half * sign,
                x2: center_x + half,
                y2: center_y + half * sign,
                paint: paint.clone(),
                round_cap: true,
            })
        };
        Group { class: "marker".to_string(), owner: Some(marker.cell), children: vec![arm(1.0), arm(-1.0)] }
    }

    fn selection_layer(&self, model: &GridModel) -> Layer {
        let size = self.cell_size as f64;
        let mut layer = Layer::new(LayerKind::Selection);
        if let Some(cell) = model.selection() {
            layer.elements.push(Element::Rect(Rect {
                x: cell.col as f64 * size,
                y: cell.row as f64 * size,
                width: size,
                height: size,
                corner_radius: None,
                paint: Paint {
                    fill: Some(SELECTION_COLOR.to_string()),
                    opacity: Some(SELECTION_OPACITY),
                    ..Paint::default()
                },
                class: "selection".to_string(),
                owner: Some(cell),
                interactive: false,
            }));
        }
        layer
    }
}

fn mark_selected(layer: &mut Layer, pending: Cell) {
    for element in &mut layer.elements {
        if let Element::Rect(rect) = element {
            if rect.owner == Some(pending) {
                rect.class = "square selected".to_string();
            }
        }
    }
}
