//! Declarative scene description.
//!
//! A [`Scene`] is everything a vector canvas needs to draw the diagram:
//! ordered layers of rectangles, lines and groups with their paint
//! attributes. It serializes to JSON for canvas front ends and to SVG via
//! [`crate::render::svg`].

use serde::{Deserialize, Serialize};

use crate::diagram::Cell;

/// Layers in z-order, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Checkerboard,
    Tiles,
    Markers,
    Selection,
}

impl LayerKind {
    pub fn class(&self) -> &'static str {
        match self {
            LayerKind::Checkerboard => "checkerboard",
            LayerKind::Tiles => "tiles",
            LayerKind::Markers => "markers",
            LayerKind::Selection => "selection-layer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self { kind, elements: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rect(Rect),
    Line(Line),
    Group(Group),
}

/// Fill and stroke shared by every primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<u32>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: Option<f64>,
    pub paint: Paint,
    pub class: String,
    /// Cell this element stands for, if any.
    pub owner: Option<Cell>,
    /// Receives pointer and keyboard activation.
    pub interactive: bool,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub paint: Paint,
    pub round_cap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub class: String,
    pub owner: Option<Cell>,
    pub children: Vec<Element>,
}

/// Full drawable state of one diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas size in drawing units.
    pub width: f64,
    pub height: f64,
    pub cell_size: u32,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Topmost interactive element under `(x, y)`, as its owning cell.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Cell> {
        self.layers
            .iter()
            .rev()
            .flat_map(|layer| layer.elements.iter().rev())
            .find_map(|element| match element {
                Element::Rect(rect) if rect.interactive && rect.contains(x, y) => rect.owner,
                _ => None,
            })
    }

    /// Whether `cell` has an interactive element that can take focus.
    pub fn is_focusable(&self, cell: Cell) -> bool {
        self.layers.iter().flat_map(|layer| layer.elements.iter()).any(|element| {
            matches!(element, Element::Rect(rect) if rect.interactive && rect.owner == Some(cell))
        })
    }
}
