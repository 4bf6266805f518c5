//! SoulWave Core
//!
//! Platform-agnostic domain types, the static track catalog, and error handling
//! shared by every SoulWave crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Category`, `User`, `MoodRecommendation`
//! - **Catalog**: the built-in session list and onboarding steps
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use soulwave_core::catalog;
//! use soulwave_core::types::{Category, TrackId};
//!
//! let sleep: Vec<_> = catalog::by_category(Some(Category::Sleep)).collect();
//! assert!(!sleep.is_empty());
//!
//! let track = catalog::find(&TrackId::new("4")).unwrap();
//! assert_eq!(track.title, "Forest Rain");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{
    Category, MoodRecommendation, OnboardingStep, Track, TrackId, User, UserId, UserStats,
};
