/// Core error types for SoulWave
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for SoulWave
#[derive(Error, Debug)]
pub enum CoreError {
    /// Category name did not match any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Track not found in the catalog
    #[error("Track not found: {0}")]
    TrackNotFound(String),
}
