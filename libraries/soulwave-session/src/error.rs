//! Error types for the app session

use thiserror::Error;

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// Sign-in form was incomplete
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Operation needs a signed-in user
    #[error("No user is signed in")]
    NotSignedIn,

    /// View cannot be entered by navigation
    #[error("Cannot navigate to {0}")]
    Navigation(String),

    /// Preference backend failure
    #[error("Preference store error: {0}")]
    Store(String),

    /// Stored value could not be (de)serialized
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] soulwave_core::CoreError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
