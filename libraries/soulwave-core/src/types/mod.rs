mod ids;
mod recommendation;
mod track;
mod user;

pub use ids::{TrackId, UserId};
pub use recommendation::{MoodRecommendation, OnboardingStep};
pub use track::{Category, Track};
pub use user::{User, UserStats};
