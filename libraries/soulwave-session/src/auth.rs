//! Mock authentication
//!
//! No backend exists: any complete form signs in, and the user gets a fixed
//! set of demo statistics.

use crate::error::{Result, SessionError};
use soulwave_core::{User, UserId, UserStats};

/// Name given to users who sign in (rather than sign up)
pub const DEMO_USER_NAME: &str = "Alex Doe";

const DEMO_AVATAR_URL: &str = "https://picsum.photos/seed/user1/200/200";

const DEMO_STATS: UserStats = UserStats {
    streak: 5,
    total_minutes: 1240,
    sessions_completed: 42,
};

/// Sign-in form contents
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// `Some` for sign-up, `None` for sign-in
    pub name: Option<String>,
}

impl Credentials {
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    pub fn sign_up(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: Some(name.into()),
        }
    }
}

/// Check the form and build the signed-in user
pub fn authenticate(credentials: &Credentials) -> Result<User> {
    let email = credentials.email.trim();
    if email.is_empty() {
        return Err(SessionError::InvalidCredentials("email is required".into()));
    }
    if credentials.password.trim().is_empty() {
        return Err(SessionError::InvalidCredentials("password is required".into()));
    }

    let name = match credentials.name.as_deref().map(str::trim) {
        None => DEMO_USER_NAME.to_string(),
        Some("") => {
            return Err(SessionError::InvalidCredentials("name is required".into()));
        }
        Some(name) => name.to_string(),
    };

    Ok(User {
        id: UserId::generate(),
        name,
        email: email.to_string(),
        avatar_url: DEMO_AVATAR_URL.to_string(),
        stats: DEMO_STATS,
    })
}
