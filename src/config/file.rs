//! Optional JSON configuration file.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```json
//! { "width": 10, "height": 6, "palette": { "object": "#2196f3" } }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::grid::{DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::diagram::grid::validate_dimensions;
use crate::diagram::Palette;
use crate::error::DiagramError;

/// Startup settings for a diagram session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub palette: Palette,
    /// Program (plus arguments) that receives the SVG on stdin for `copy`.
    pub clipboard_command: Option<String>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            palette: Palette::default(),
            clipboard_command: None,
        }
    }
}

impl DiagramConfig {
    /// Decode a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DiagramError> {
        let config: DiagramConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and decode a configuration file.
    pub fn load(path: &Path) -> Result<Self, DiagramError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            DiagramError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config = Self::from_json(&text)?;
        info!("[Config] Loaded {} ({}x{})", path.display(), config.width, config.height);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DiagramError> {
        validate_dimensions(self.width, self.height)?;
        if self.cell_size == 0 {
            return Err(DiagramError::Config("cell_size must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = DiagramConfig::from_json(r##"{"width": 10, "palette": {"object": "#2196F3"}}"##).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(config.palette.object.as_str(), "#2196f3");
        assert_eq!(config.palette.stroke, Palette::default().stroke);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(DiagramConfig::from_json(r#"{"width": 0}"#).unwrap_err().code(), "INVALID_DIMENSION");
        assert_eq!(DiagramConfig::from_json(r#"{"cell_size": 0}"#).unwrap_err().code(), "CONFIG");
        assert_eq!(
            DiagramConfig::from_json(r#"{"palette": {"stroke": "green"}}"#).unwrap_err().code(),
            "CONFIG"
        );
        assert!(DiagramConfig::from_json("not json").is_err());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = DiagramConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.code(), "CONFIG");
    }
}
