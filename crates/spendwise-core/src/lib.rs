//! Spendwise Core Library
//!
//! Shared functionality for the Spendwise expense advisor:
//! - Configuration loading (credential, model, API base)
//! - Pluggable generation backends (Gemini, mock)
//! - Prompt construction for the expense report
//! - The advisor workflow: validate, prompt, generate, surface errors

pub mod config;
pub mod error;
pub mod gen;
pub mod prompt;
pub mod workflow;

/// Test utilities including the mock Gemini server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{AdvisorConfig, ApiKey, CREDENTIAL_VAR, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use gen::{GeminiBackend, GenClient, GenerationBackend, MockBackend};
pub use prompt::build_report_prompt;
pub use workflow::{ExpenseAdvisor, GeneratedReport, REMEDIATION_HINT};
