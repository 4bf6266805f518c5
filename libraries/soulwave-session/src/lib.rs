//! SoulWave - App Session
//!
//! The shell around the player overlay:
//! - Splash → Auth → Onboarding → Home routing
//! - Mock sign-in / sign-up with demo statistics
//! - Theme and onboarding flags kept in a [`PreferenceStore`]
//! - Completed sessions credited to the user when a track finishes
//!
//! # Example
//!
//! ```rust
//! use soulwave_core::catalog;
//! use soulwave_playback::SteppedMedia;
//! use soulwave_session::{AppSession, Credentials, MemoryPreferences, View};
//!
//! let mut app = AppSession::new(MemoryPreferences::new(), SteppedMedia::new());
//! assert_eq!(app.start().unwrap(), View::Auth);
//!
//! app.sign_in(&Credentials::sign_in("alex@example.com", "secret")).unwrap();
//! assert_eq!(app.view(), View::Onboarding);
//!
//! app.complete_onboarding().unwrap();
//! app.play_track(catalog::get("2").unwrap().clone());
//! assert!(app.player_overlay_visible());
//! assert_eq!(app.display_first_name(), "Alex");
//! ```

mod auth;
mod error;
mod navigation;
mod preferences;
mod session;

pub use auth::{authenticate, Credentials, DEMO_USER_NAME};
pub use error::{Result, SessionError};
pub use navigation::{Theme, View};
pub use preferences::{MemoryPreferences, PreferenceStore, KEY_ONBOARDED, KEY_THEME, KEY_USER};
pub use session::{greeting, greeting_now, AppSession};
