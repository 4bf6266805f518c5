use serde::{Deserialize, Serialize};

/// A session suggested by the mood matcher
///
/// `category` is kept as the raw string the service returned; it usually, but
/// not always, names a [`crate::Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecommendation {
    pub title: String,
    pub category: String,
    pub reason: String,
}

impl MoodRecommendation {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            reason: reason.into(),
        }
    }
}

/// One page of the onboarding carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub title: String,
    pub description: String,
    pub image_url: String,
}
