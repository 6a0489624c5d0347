//! Advisor configuration
//!
//! The credential and model selection are resolved once at startup and
//! injected into the workflow. Nothing reads the environment after that,
//! so tests can construct a config (or a mock backend) directly.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: API key for the generation service (required)
//! - `SPENDWISE_MODEL`: model override (default: gemini-1.5-flash)
//! - `SPENDWISE_API_BASE`: API base URL override (for tests/dev)
//! - `SPENDWISE_BACKEND`: `gemini` (default) or `mock`

use crate::error::{Error, Result};

/// Environment variable holding the generation service credential
pub const CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

/// Default model identifier
///
/// A named, versioned model rather than a floating alias, so behavior does
/// not drift silently when the provider repoints `latest`.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// API key for the generation service
///
/// Wrapped so the secret never ends up in logs via `{:?}`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Resolved advisor configuration
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Credential for the generation service
    pub api_key: ApiKey,
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL of the generation API
    pub api_base: String,
}

impl AdvisorConfig {
    /// Build a config from explicit values
    pub fn new(api_key: ApiKey, model: &str, api_base: &str) -> Self {
        Self {
            api_key,
            model: model.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Load the configuration from the environment
    ///
    /// A missing or blank `GEMINI_API_KEY` is a fatal configuration error
    /// for the session: no generation call may be attempted without it.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(CREDENTIAL_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "{} is not set; add your generation service API key to the environment",
                    CREDENTIAL_VAR
                ))
            })?;

        let model =
            std::env::var("SPENDWISE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base =
            std::env::var("SPENDWISE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self::new(ApiKey::new(api_key), &model, &api_base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("super-secret");
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("****"));
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = AdvisorConfig::new(
            ApiKey::new("k"),
            DEFAULT_MODEL,
            "https://example.test/",
        );
        assert_eq!(config.api_base, "https://example.test");
    }

    #[test]
    fn test_from_env_missing_credential() {
        // No other test touches this variable, so the removal is safe
        std::env::remove_var(CREDENTIAL_VAR);

        let err = AdvisorConfig::from_env().unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains(CREDENTIAL_VAR)),
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_default_model_is_versioned() {
        // Versioned model names keep behavior stable across provider updates
        assert!(DEFAULT_MODEL.contains("1.5"));
        assert!(!DEFAULT_MODEL.ends_with("latest"));
    }
}
