//! SoulWave Recommendations
//!
//! Turns a free-text mood into a handful of suggested sessions.
//!
//! # Features
//!
//! - **Gemini client**: `generateContent` with a JSON response schema
//! - **Fallback**: fixed suggestions when no API key is configured
//! - **Infallible surface**: [`MoodRecommender::recommend`] always returns a list
//!
//! # Example
//!
//! ```ignore
//! use soulwave_recommend::{GeminiRecommender, MoodRecommender, RecommendConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recommender = GeminiRecommender::new(RecommendConfig::default())?;
//!
//!     // No key configured: the default list comes back
//!     let recs = recommender.recommend("stressed").await;
//!     assert_eq!(recs.len(), 2);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod recommender;
mod types;

pub use client::GeminiRecommender;
pub use error::{RecommendError, Result};
pub use recommender::{fallback_recommendations, MoodRecommender, StaticRecommender};
pub use types::{RecommendConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
