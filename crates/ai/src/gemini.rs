//! Gemini `generateContent` client.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stocktake_core::translator::{GenerationError, LanguageModel};
use stocktake_shared::config::ModelConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Client for the hosted generative-language service.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from model settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &ModelConfig) -> Result<Self, GenerationError> {
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| GenerationError::request(format!("invalid model api key: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GenerationError::request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

impl LanguageModel for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint(model))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(model, status = status.as_u16(), "Model rejected request");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::decode(e.to_string()))?;

        parsed.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(&ModelConfig {
            api_key: "model-key".to_string(),
            base_url: server.uri(),
            primary_model: "gemini-1.5-pro".to_string(),
            fallback_model: "gemini-1.5-flash".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_posts_prompt_and_reads_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .and(header("x-goog-api-key", "model-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "Query: list products" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "SELECT name " }, { "text": "FROM products;" }] } },
                    { "content": { "parts": [{ "text": "ignored" }] } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server)
            .generate("gemini-1.5-pro", "Query: list products")
            .await
            .unwrap();

        assert_eq!(text, "SELECT name FROM products;");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate("gemini-1.5-pro", "prompt")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Status {
                status: 429,
                body: "quota exceeded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate("gemini-1.5-flash", "prompt")
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate("gemini-1.5-flash", "prompt")
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Decode(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let rendered = format!(
            "{:?}",
            GeminiClient::new(&ModelConfig {
                api_key: "model-key".to_string(),
                base_url: "https://generativelanguage.googleapis.com/".to_string(),
                primary_model: "p".to_string(),
                fallback_model: "f".to_string(),
            })
            .unwrap()
        );
        assert!(rendered.contains("https://generativelanguage.googleapis.com\""));
        assert!(!rendered.contains("model-key"));
    }
}
