use std::time::{Duration, Instant};

use log::{info, warn};
use serde::Serialize;

use crate::config::status::STATUS_DURATION_SECS;
use crate::diagram::Outcome;
use crate::error::DiagramError;

/// A transient, human-readable message tagged success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub code: &'static str,
    pub message: String,
    pub success: bool,
}

impl Status {
    pub fn success(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), success: true }
    }

    pub fn failure(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), success: false }
    }
}

impl From<&Outcome> for Status {
    fn from(outcome: &Outcome) -> Self {
        Status { code: outcome.code(), message: outcome.message(), success: outcome.is_success() }
    }
}

impl From<&DiagramError> for Status {
    fn from(err: &DiagramError) -> Self {
        Status::failure(err.code(), err.to_string())
    }
}

/// Holds the latest status until it expires.
pub struct StatusBoard {
    current: Option<(Status, Instant)>,
    duration: Duration,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_secs(STATUS_DURATION_SECS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self { current: None, duration }
    }

    /// Replace the current status.
    pub fn post(&mut self, status: Status) {
        self.post_at(status, Instant::now());
    }

    pub fn post_at(&mut self, status: Status, now: Instant) {
        if status.success {
            info!("[Status] {}: {}", status.code, status.message);
        } else {
            warn!("[Status] {}: {}", status.code, status.message);
        }
        self.current = Some((status, now));
    }

    /// The current status, unless it has expired.
    pub fn current(&self) -> Option<&Status> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&Status> {
        match &self.current {
            Some((status, posted)) if now.duration_since(*posted) < self.duration => Some(status),
            _ => None,
        }
    }

    /// Drop an expired status. Returns true if one was dropped.
    pub fn expire(&mut self) -> bool {
        self.expire_at(Instant::now())
    }

    pub fn expire_at(&mut self, now: Instant) -> bool {
        let expired = matches!(&self.current, Some((_, posted)) if now.duration_since(*posted) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_expires_after_duration() {
        let mut board = StatusBoard::new();
        let start = Instant::now();
        board.post_at(Status::success("SAVED", "SVG saved successfully!"), start);

        assert_eq!(board.current_at(start + Duration::from_secs(2)).map(|s| s.code), Some("SAVED"));
        assert!(!board.expire_at(start + Duration::from_secs(2)));
        assert!(board.current_at(start + Duration::from_secs(3)).is_none());
        assert!(board.expire_at(start + Duration::from_secs(3)));
        assert!(!board.expire_at(start + Duration::from_secs(4)));
    }

    #[test]
    fn newer_status_replaces_older() {
        let mut board = StatusBoard::with_duration(Duration::from_secs(60));
        board.post(Status::success("A", "first"));
        board.post(Status::failure("B", "second"));
        let current = board.current().unwrap();
        assert_eq!(current.code, "B");
        assert!(!current.success);
    }

    #[test]
    fn converts_errors_and_outcomes() {
        let err = DiagramError::InvalidDimension { width: 0, height: 0 };
        let status = Status::from(&err);
        assert_eq!(status.code, "INVALID_DIMENSION");
        assert!(!status.success);

        let outcome = Outcome::MarkerRemoved(crate::diagram::Cell::new(1, 1));
        let status = Status::from(&outcome);
        assert!(status.success);
        assert_eq!(status.code, "MARKER_REMOVED");
    }
}
