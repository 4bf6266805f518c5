//! Error types reported by the media primitive

use thiserror::Error;

/// Media primitive errors
///
/// None of these reach the presentation layer: the controller logs them and
/// keeps the user's requested state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Platform refused to start playback (e.g. autoplay policy)
    #[error("Play request rejected: {0}")]
    PlayRejected(String),

    /// No media source is loaded
    #[error("No media source loaded")]
    NoSource,
}

/// Result type for media primitive commands
pub type Result<T> = std::result::Result<T, MediaError>;
