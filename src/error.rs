//! Error types for drift detection.

use std::path::PathBuf;

/// Result alias for drift operations
pub type Result<T> = std::result::Result<T, DriftError>;

/// Errors surfaced by baseline handling and drift detection.
///
/// Per-feature test failures are not errors: they degrade to an
/// untested feature result so one bad feature cannot mask the others.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    #[error("no baseline loaded: capture one with save_baseline or load one with load_baseline")]
    NoBaseline,

    #[error("baseline file not found: {0}")]
    BaselineNotFound(PathBuf),

    #[error("baseline file is corrupt: {0}")]
    BaselineCorrupt(String),

    #[error(
        "invalid thresholds: warning {warning} must be below critical {critical}, both in [0, 1]"
    )]
    InvalidThresholds { warning: f64, critical: f64 },

    #[error("critical drift detected: overall score {score:.4} >= threshold {threshold:.4}")]
    CriticalDrift { score: f64, threshold: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
