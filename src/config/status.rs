/// Status message timing and export defaults.
///
/// Units are in each constant's name.
pub const STATUS_DURATION_SECS: u64 = 3;

/// Interval at which the session loop expires stale status messages.
pub const STATUS_POLL_MILLIS: u64 = 250;

/// Suggested file name for exported diagrams.
pub const DEFAULT_EXPORT_FILE: &str = "tile-diagram.svg";
