//! Tests for the recommendation client.
//!
//! These tests use a mock server in place of the generative language API.

use serde_json::json;
use soulwave_recommend::{
    GeminiRecommender, MoodRecommender, RecommendConfig, RecommendError,
};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiRecommender {
    let config = RecommendConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5));
    GeminiRecommender::new(config).unwrap()
}

fn model_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

// =============================================================================
// Successful requests
// =============================================================================

mod success {
    use super::*;

    #[tokio::test]
    async fn test_parses_generated_recommendations() {
        let server = MockServer::start().await;
        let generated = json!([
            { "title": "Slow Exhale", "category": "Meditation", "reason": "Eases tension" },
            { "title": "Night Rain", "category": "Sleep", "reason": "Masks racing thoughts" },
            { "title": "Pine Walk", "category": "Nature", "reason": "Grounding" }
        ])
        .to_string();

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_reply(&generated)))
            .expect(1)
            .mount(&server)
            .await;

        let recs = client_for(&server).recommend("anxious").await;

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "Slow Exhale");
        assert_eq!(recs[1].category, "Sleep");
        assert_eq!(recs[2].reason, "Grounding");
    }

    #[tokio::test]
    async fn test_prompt_carries_the_mood() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_reply("[]")))
            .mount(&server)
            .await;

        let recs = client_for(&server).recommend("  sleepy  ").await;
        assert!(recs.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"sleepy\""));
        assert!(prompt.contains("SoulWave"));
    }

    #[tokio::test]
    async fn test_custom_model_changes_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_reply(
                r#"[{"title":"T","category":"Focus","reason":"R"}]"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let config = RecommendConfig::new("test-key")
            .with_base_url(server.uri())
            .with_model("gemini-pro");
        let client = GeminiRecommender::new(config).unwrap();

        assert_eq!(client.recommend("bored").await.len(), 1);
    }
}

// =============================================================================
// Short-circuits
// =============================================================================

mod short_circuit {
    use super::*;

    #[tokio::test]
    async fn test_blank_mood_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.recommend("").await.is_empty());
        assert!(client.recommend(" \t ").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_serves_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = RecommendConfig::default().with_base_url(server.uri());
        let client = GeminiRecommender::new(config).unwrap();
        assert!(!client.has_api_key());

        let recs = client.recommend("sad").await;
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Calming Breath");
        assert_eq!(recs[0].category, "Meditation");
        assert_eq!(recs[1].title, "Ocean Waves");
        assert_eq!(recs[1].reason, "AI Key missing - default fallback.");
    }

    #[tokio::test]
    async fn test_missing_key_serves_fallback_for_blank_mood() {
        let config = RecommendConfig::default();
        let client = GeminiRecommender::new(config).unwrap();

        let recs = client.recommend("   ").await;
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Calming Breath");
    }
}

// =============================================================================
// Failures
// =============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_server_error_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.recommend("tired").await.is_empty());

        match client.try_recommend("tired").await {
            Err(RecommendError::ServiceError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("Expected ServiceError, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_generated_json_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(model_reply("here you go: [oops")),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.recommend("happy").await.is_empty());
        assert!(matches!(
            client.try_recommend("happy").await,
            Err(RecommendError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_text_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.recommend("calm").await.is_empty());
        assert!(matches!(
            client.try_recommend("calm").await,
            Err(RecommendError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        assert!(client_for(&server).recommend("calm").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_empty_list() {
        let config = RecommendConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = GeminiRecommender::new(config).unwrap();

        assert!(client.recommend("lost").await.is_empty());
        assert!(matches!(
            client.try_recommend("lost").await,
            Err(RecommendError::Request(_))
        ));
    }
}
