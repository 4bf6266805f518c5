//! Error types for the recommendation client.

use thiserror::Error;

/// Errors that can occur while asking the language model for sessions.
///
/// These never leave [`crate::MoodRecommender::recommend`]; they are logged
/// and turned into an empty list there.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Service error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Response carried no generated text
    #[error("Response contained no text")]
    EmptyResponse,

    /// Generated text was not the expected JSON
    #[error("Failed to parse recommendations: {0}")]
    ParseError(String),
}

/// Result type for recommendation operations.
pub type Result<T> = std::result::Result<T, RecommendError>;
