//! Mood recommender abstraction

use async_trait::async_trait;
use soulwave_core::MoodRecommendation;

const FALLBACK_REASON: &str = "AI Key missing - default fallback.";

/// Suggests sessions for a free-text mood
///
/// Never fails: any problem reaching or understanding the backend yields an
/// empty list, so the caller can always render the result.
#[async_trait]
pub trait MoodRecommender: Send + Sync {
    async fn recommend(&self, mood: &str) -> Vec<MoodRecommendation>;
}

/// Fixed suggestions served when no API key is configured
pub fn fallback_recommendations() -> Vec<MoodRecommendation> {
    vec![
        MoodRecommendation::new("Calming Breath", "Meditation", FALLBACK_REASON),
        MoodRecommendation::new("Ocean Waves", "Nature", FALLBACK_REASON),
    ]
}

/// Recommender that always answers with the same list
#[derive(Debug, Clone, Default)]
pub struct StaticRecommender {
    recommendations: Vec<MoodRecommendation>,
}

impl StaticRecommender {
    pub fn new(recommendations: Vec<MoodRecommendation>) -> Self {
        Self { recommendations }
    }

    /// Serves [`fallback_recommendations`]
    pub fn fallback() -> Self {
        Self::new(fallback_recommendations())
    }
}

#[async_trait]
impl MoodRecommender for StaticRecommender {
    async fn recommend(&self, mood: &str) -> Vec<MoodRecommendation> {
        if mood.trim().is_empty() {
            return Vec::new();
        }
        self.recommendations.clone()
    }
}
