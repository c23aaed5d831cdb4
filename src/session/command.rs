//! Session commands.
//!
//! Commands arrive one per line, either as plain words (`activate 0 1`) or as
//! JSON objects (`{"command":"activate","row":0,"col":1}`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::diagram::Mode;
use crate::error::DiagramError;

/// Which palette entry a `color` command changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    /// Fill of new tiles and markers.
    Object,
    Stroke,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Activate { row: usize, col: usize },
    Click { x: f64, y: f64 },
    Key { row: usize, col: usize, key: String },
    Mode { mode: Mode },
    /// Signed so that negative sides reach validation.
    Size { width: i64, height: i64 },
    Reset,
    Clear,
    Color { target: ColorTarget, color: String },
    Save { path: Option<PathBuf> },
    Copy,
    Uri,
    Show,
    Scene,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  activate <row> <col>          activate a square (0-indexed)
  click <x> <y>                 click at canvas coordinates
  key <row> <col> <enter|space> press a key on a focused square
  mode <tile|marker>            switch placement mode
  size <width> <height>         resize the grid (clears the diagram)
  reset | clear                 remove every tile and marker
  color <object|stroke|light|dark> <#hex>
  save [path]                   write the SVG (default tile-diagram.svg)
  copy                          copy the SVG to the clipboard
  uri                           print the SVG as a data URI
  show                          print a text preview
  scene                         print the scene as JSON
  status                        print the current status message
  help | quit";

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, DiagramError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with('{') {
            return serde_json::from_str(line)
                .map(Some)
                .map_err(|err| DiagramError::InvalidCommand(err.to_string()));
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let name = words[0].to_ascii_lowercase();
        let args = &words[1..];
        let command = match (name.as_str(), args) {
            ("activate" | "a", [row, col]) => Command::Activate { row: number(row)?, col: number(col)? },
            ("click", [x, y]) => Command::Click { x: coordinate(x)?, y: coordinate(y)? },
            ("key", [row, col, key]) => Command::Key {
                row: number(row)?,
                col: number(col)?,
                key: key.to_string(),
            },
            ("mode", [mode]) => Command::Mode { mode: parse_mode(mode)? },
            ("size", [width, height]) => Command::Size { width: side(width)?, height: side(height)? },
            ("reset", []) => Command::Reset,
            ("clear", []) => Command::Clear,
            ("color", [target, color]) => Command::Color {
                target: parse_target(target)?,
                color: color.to_string(),
            },
            ("save", []) => Command::Save { path: None },
            ("save", [path]) => Command::Save { path: Some(PathBuf::from(*path)) },
            ("copy", []) => Command::Copy,
            ("uri", []) => Command::Uri,
            ("show", []) => Command::Show,
            ("scene", []) => Command::Scene,
            ("status", []) => Command::Status,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(DiagramError::InvalidCommand(format!("'{}' (try 'help')", line))),
        };
        Ok(Some(command))
    }
}

fn number(word: &str) -> Result<usize, DiagramError> {
    word.parse()
        .map_err(|_| DiagramError::InvalidCommand(format!("'{}' is not a non-negative integer", word)))
}

fn side(word: &str) -> Result<i64, DiagramError> {
    word.parse()
        .map_err(|_| DiagramError::InvalidCommand(format!("'{}' is not an integer", word)))
}

fn coordinate(word: &str) -> Result<f64, DiagramError> {
    word.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DiagramError::InvalidCommand(format!("'{}' is not a coordinate", word)))
}

fn parse_mode(word: &str) -> Result<Mode, DiagramError> {
    match word.to_ascii_lowercase().as_str() {
        "tile" | "tiles" => Ok(Mode::Tile),
        "marker" | "markers" | "x" => Ok(Mode::Marker),
        _ => Err(DiagramError::InvalidCommand(format!("unknown mode '{}'", word))),
    }
}

fn parse_target(word: &str) -> Result<ColorTarget, DiagramError> {
    match word.to_ascii_lowercase().as_str() {
        "object" | "tile" | "fill" => Ok(ColorTarget::Object),
        "stroke" => Ok(ColorTarget::Stroke),
        "light" => Ok(ColorTarget::Light),
        "dark" => Ok(ColorTarget::Dark),
        _ => Err(DiagramError::InvalidCommand(format!("unknown color target '{}'", word))),
    }
}
