//! Generative language API client.

use crate::error::{RecommendError, Result};
use crate::recommender::{fallback_recommendations, MoodRecommender};
use crate::types::{
    recommendation_schema, GenerateContentRequest, GenerateContentResponse, RecommendConfig,
};
use async_trait::async_trait;
use reqwest::Client;
use soulwave_core::{Category, MoodRecommendation};
use tracing::{debug, error, info, warn};
use url::Url;

/// Recommender backed by a Gemini model.
///
/// # Example
///
/// ```ignore
/// use soulwave_recommend::{GeminiRecommender, MoodRecommender, RecommendConfig};
///
/// let recommender = GeminiRecommender::new(RecommendConfig::new("my-key"))?;
/// for rec in recommender.recommend("anxious before an exam").await {
///     println!("{} ({}) - {}", rec.title, rec.category, rec.reason);
/// }
/// ```
pub struct GeminiRecommender {
    http: Client,
    config: RecommendConfig,
}

impl GeminiRecommender {
    /// Create a new client with the given configuration.
    pub fn new(config: RecommendConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| RecommendError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RecommendError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("SoulWave/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: RecommendConfig {
                base_url,
                ..config
            },
        })
    }

    /// Whether requests will reach the model (an API key is configured)
    pub fn has_api_key(&self) -> bool {
        self.config.key().is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Ask the model for sessions, surfacing every failure
    ///
    /// Callers that just want something to render should use
    /// [`MoodRecommender::recommend`] instead.
    pub async fn try_recommend(&self, mood: &str) -> Result<Vec<MoodRecommendation>> {
        let Some(key) = self.config.key() else {
            warn!("No API key configured, serving default recommendations");
            return Ok(fallback_recommendations());
        };
        let mood = mood.trim();
        if mood.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint();
        debug!(url = %url, model = %self.config.model, "Requesting mood recommendations");

        let body = GenerateContentRequest::json(build_prompt(mood), recommendation_schema());
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecommendError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RecommendError::ParseError(format!("Invalid response body: {e}")))?;
        let text = response.text().ok_or(RecommendError::EmptyResponse)?;

        let recommendations: Vec<MoodRecommendation> = serde_json::from_str(&text)
            .map_err(|e| RecommendError::ParseError(e.to_string()))?;

        info!(count = recommendations.len(), "Received mood recommendations");
        Ok(recommendations)
    }
}

#[async_trait]
impl MoodRecommender for GeminiRecommender {
    async fn recommend(&self, mood: &str) -> Vec<MoodRecommendation> {
        match self.try_recommend(mood).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!(error = %e, "Mood recommendation failed");
                Vec::new()
            }
        }
    }
}

/// Prompt text for a mood
///
/// Quran sessions are curated, so the model may only pick from the other
/// categories.
fn build_prompt(mood: &str) -> String {
    let categories: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| **c != Category::Quran)
        .map(|c| c.as_str())
        .collect();

    format!(
        "The user is feeling: \"{mood}\".\n\
         Recommend 3 specific fictional audio sessions for a wellness app called SoulWave.\n\
         Categories must be one of: {}.\n\
         Return strictly JSON.",
        categories.join(", ")
    )
}
