//! Centralized error type for the diagram tool.
//!
//! Every variant carries a stable short code (e.g. "INVALID_DIMENSION") so
//! that status messages and logs stay consistent across the session layer.

use std::fmt;

/// Errors that abort the requested operation but never the session.
#[derive(Debug)]
pub enum DiagramError {
    /// A grid dimension was not positive or above the configured maximum.
    InvalidDimension { width: i64, height: i64 },
    /// A color string was not a `#rgb` / `#rrggbb` hex color.
    InvalidColor(String),
    /// A command line could not be parsed.
    InvalidCommand(String),
    /// The configuration file could not be read or decoded.
    Config(String),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// The clipboard helper is unavailable or failed.
    Clipboard(String),
}

impl DiagramError {
    /// Unique error code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            DiagramError::InvalidDimension { .. } => "INVALID_DIMENSION",
            DiagramError::InvalidColor(_) => "INVALID_COLOR",
            DiagramError::InvalidCommand(_) => "INVALID_COMMAND",
            DiagramError::Config(_) => "CONFIG",
            DiagramError::Io(_) => "IO",
            DiagramError::Clipboard(_) => "CLIPBOARD",
        }
    }
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::InvalidDimension { width, height } => write!(
                f,
                "Invalid grid size {}x{}: each side must be between 1 and {}",
                width,
                height,
                crate::config::grid::MAX_GRID_DIMENSION
            ),
            DiagramError::InvalidColor(color) => {
                write!(f, "Invalid color '{}': expected #rgb or #rrggbb", color)
            }
            DiagramError::InvalidCommand(reason) => write!(f, "Invalid command: {}", reason),
            DiagramError::Config(reason) => write!(f, "Configuration error: {}", reason),
            DiagramError::Io(err) => write!(f, "I/O error: {}", err),
            DiagramError::Clipboard(reason) => write!(f, "Clipboard error: {}", reason),
        }
    }
}

impl std::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiagramError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DiagramError {
    fn from(err: std::io::Error) -> Self {
        DiagramError::Io(err)
    }
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        DiagramError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = DiagramError::InvalidDimension { width: 0, height: 3 };
        assert_eq!(err.code(), "INVALID_DIMENSION");
        assert!(err.to_string().contains("0x3"));
        assert_eq!(DiagramError::InvalidColor("red".into()).code(), "INVALID_COLOR");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: DiagramError = io.into();
        assert_eq!(err.code(), "IO");
        assert!(std::error::Error::source(&err).is_some());
    }
}
