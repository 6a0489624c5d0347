//! Pluggable text-generation backend abstraction
//!
//! This module provides a backend-agnostic interface for the one operation
//! the advisor needs: send a text prompt, get a text blob back. No response
//! schema beyond that is assumed.
//!
//! # Architecture
//!
//! - `GenerationBackend` trait: defines the interface for all backends
//! - `GenClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `SPENDWISE_BACKEND`: Backend to use (gemini, mock). Default: gemini
//! - `GEMINI_API_KEY`: credential for the gemini backend (via `AdvisorConfig`)
//! - `SPENDWISE_MODEL`: model name (default: gemini-1.5-flash)

mod gemini;
mod mock;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::config::AdvisorConfig;
use crate::error::Result;

/// Trait defining the interface for all generation backends
///
/// Backends must be Send + Sync to allow use across async tasks.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text from a single prompt
    ///
    /// One prompt in, one text blob out. The caller treats the reply as
    /// opaque Markdown and never post-processes it.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for display and logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete generation client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum GenClient {
    /// Gemini backend (hosted generateContent API)
    Gemini(GeminiBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl GenClient {
    /// Create a client from the environment
    ///
    /// Checks `SPENDWISE_BACKEND` to determine which backend to use:
    /// - `gemini` (default): resolves the full configuration and fails with
    ///   a configuration error when the credential is missing
    /// - `mock`: canned replies for development without a live API
    pub fn from_env() -> Result<Self> {
        let backend =
            std::env::var("SPENDWISE_BACKEND").unwrap_or_else(|_| "gemini".to_string());

        match backend.to_lowercase().as_str() {
            "mock" => Ok(GenClient::Mock(MockBackend::new())),
            "gemini" => Ok(Self::from_config(&AdvisorConfig::from_env()?)),
            other => {
                tracing::warn!(backend = %other, "Unknown SPENDWISE_BACKEND, falling back to gemini");
                Ok(Self::from_config(&AdvisorConfig::from_env()?))
            }
        }
    }

    /// Create a Gemini client from a resolved configuration
    pub fn from_config(config: &AdvisorConfig) -> Self {
        GenClient::Gemini(GeminiBackend::from_config(config))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        GenClient::Mock(MockBackend::new())
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        match self {
            GenClient::Gemini(b) => GenClient::Gemini(b.with_model(model)),
            GenClient::Mock(b) => GenClient::Mock(b.with_model(model)),
        }
    }
}

// Implement GenerationBackend for GenClient by delegating to the inner backend
#[async_trait]
impl GenerationBackend for GenClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            GenClient::Gemini(b) => b.generate(prompt).await,
            GenClient::Mock(b) => b.generate(prompt).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            GenClient::Gemini(b) => b.health_check().await,
            GenClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            GenClient::Gemini(b) => b.model(),
            GenClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            GenClient::Gemini(b) => b.host(),
            GenClient::Mock(b) => b.host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_client_mock() {
        let client = GenClient::mock();
        assert_eq!(client.model(), "mock");
        assert_eq!(client.host(), "mock://localhost");
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        let client = GenClient::mock();
        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_mock_generate_roundtrip() {
        let client = GenClient::Mock(MockBackend::with_reply("| STT | ... |"));
        let text = client.generate("any prompt").await.unwrap();
        assert_eq!(text, "| STT | ... |");
    }
}
