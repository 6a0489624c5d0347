//! Gemini backend implementation
//!
//! HTTP client for the Gemini `generateContent` API. Sends the credential
//! via the `x-goog-api-key` header and the model as part of the request
//! path, so a config carries everything a request needs.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::error::{Error, Result};

use super::GenerationBackend;

/// Gemini backend
///
/// One `generateContent` call per prompt, no streaming, no retries. The
/// model is pinned to a named, versioned identifier at construction time.
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Create from a resolved configuration
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(&config.api_base, config.api_key.as_str(), &config.model)
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: model.to_string(),
        }
    }

    /// List model identifiers available to this credential
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .http_client
            .get(format!("{}/v1beta/models", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Service(format!(
                "Failed to list models: HTTP {}",
                response.status()
            )));
        }

        #[derive(Deserialize)]
        struct ModelsResponse {
            #[serde(default)]
            models: Vec<ModelInfo>,
        }

        #[derive(Deserialize)]
        struct ModelInfo {
            name: String,
        }

        let listing: ModelsResponse = response.json().await?;

        // The API returns names as "models/gemini-1.5-flash"
        Ok(listing
            .models
            .into_iter()
            .map(|m| {
                m.name
                    .strip_prefix("models/")
                    .map(str::to_string)
                    .unwrap_or(m.name)
            })
            .collect())
    }

    /// Decode a non-success response into a service error
    ///
    /// The API wraps failures (bad key, model not found, quota exceeded) in
    /// an `{"error": {...}}` envelope; surface its message when present,
    /// the raw body otherwise.
    async fn service_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        #[derive(Deserialize)]
        struct ErrorEnvelope {
            error: ApiError,
        }

        #[derive(Deserialize)]
        struct ApiError {
            message: String,
            #[serde(default)]
            status: String,
        }

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) if !envelope.error.status.is_empty() => Error::Service(format!(
                "{} ({})",
                envelope.error.message, envelope.error.status
            )),
            Ok(envelope) => Error::Service(envelope.error.message),
            Err(_) => Error::Service(format!("Gemini API error ({}): {}", status, body)),
        }
    }
}

/// Request to the generateContent endpoint
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[async_trait::async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let generated: GenerateContentResponse = response.json().await?;
        debug!(candidates = generated.candidates.len(), "Received generateContent response");

        let candidate = generated
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::Service("No candidates in response".into()))?;

        // Join multi-part candidates; single-part is the common case
        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(Error::Service("No text in response".into()));
        }

        Ok(text)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(format!("{}/v1beta/models/{}", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_backend_new_trims_trailing_slash() {
        let backend = GeminiBackend::new("https://example.test/", "key", "gemini-1.5-flash");
        assert_eq!(backend.host(), "https://example.test");
    }

    #[test]
    fn test_backend_from_config() {
        let config = AdvisorConfig::new(ApiKey::new("key"), "gemini-1.5-flash", "https://example.test");
        let backend = GeminiBackend::from_config(&config);
        assert_eq!(backend.model(), "gemini-1.5-flash");
        assert_eq!(backend.host(), "https://example.test");
    }

    #[test]
    fn test_with_model_keeps_host() {
        let backend = GeminiBackend::new("https://example.test", "key", "gemini-1.5-flash");
        let other = backend.with_model("gemini-1.5-pro");
        assert_eq!(other.model(), "gemini-1.5-pro");
        assert_eq!(other.host(), "https://example.test");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Hello".into(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "| STT | Nội dung | Số tiền |"}], "role": "model"}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(
            response.candidates[0].content.parts[0].text,
            "| STT | Nội dung | Số tiền |"
        );
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        let backend = GeminiBackend::new("http://127.0.0.1:1", "key", "gemini-1.5-flash");
        assert!(!backend.health_check().await);
    }
}
