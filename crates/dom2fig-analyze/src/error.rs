//! Error types for analysis inputs.

use thiserror::Error;

/// Result type alias for analyzer input handling.
pub type Result<T> = std::result::Result<T, AnalyzeError>;

/// Errors raised while loading analyzer input.
///
/// Analysis itself never fails; only decoding a serialized snapshot can.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Malformed element snapshot.
    #[error("Invalid element snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
