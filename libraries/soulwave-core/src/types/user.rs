/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Listening statistics shown on the profile screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive days with at least one session
    pub streak: u32,

    /// Total minutes listened
    pub total_minutes: u32,

    /// Sessions played through to the end
    pub sessions_completed: u32,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Sign-in email
    pub email: String,

    /// Avatar image reference
    pub avatar_url: String,

    /// Listening statistics
    #[serde(default)]
    pub stats: UserStats,
}

impl User {
    /// First word of the display name, or `None` for a blank name
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}
