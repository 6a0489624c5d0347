//! Expense advisor workflow
//!
//! One user-triggered cycle: validate the expense text, build the prompt,
//! make a single generation call, hand back the reply verbatim. Each call
//! is independent; the struct holds no mutable state.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::gen::{GenClient, GenerationBackend};
use crate::prompt::build_report_prompt;

/// Static remediation hint attached to every service error
///
/// An expired or mistyped API key is by far the most common failure, so
/// the UI shows this next to the raw error message.
pub const REMEDIATION_HINT: &str =
    "Hãy kiểm tra lại xem API key của bạn có còn hạn hoặc có đúng không.";

/// The generated report, exactly as the service returned it
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Markdown text from the generation service, unmodified
    pub markdown: String,
    /// Model that produced it
    pub model: String,
}

/// Orchestrates one prompt/generate/display cycle per submission
#[derive(Clone)]
pub struct ExpenseAdvisor {
    client: GenClient,
}

impl ExpenseAdvisor {
    /// Create an advisor around an injected generation client
    pub fn new(client: GenClient) -> Self {
        Self { client }
    }

    /// Create an advisor from the environment
    ///
    /// Fails with a configuration error when the credential is missing,
    /// before any generation call can be attempted.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GenClient::from_env()?))
    }

    /// The underlying generation client
    pub fn client(&self) -> &GenClient {
        &self.client
    }

    /// Model identifier used for submissions
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Run one submission
    ///
    /// Empty or whitespace-only expense text is rejected before any
    /// external call. Any failure from the call comes back as a service
    /// error carrying the underlying message; the reply text is never
    /// transformed, truncated, or re-formatted.
    pub async fn advise(&self, income: u64, expenses: &str) -> Result<GeneratedReport> {
        let expenses = expenses.trim();
        if expenses.is_empty() {
            return Err(Error::Validation(
                "Vui lòng nhập nội dung chi tiêu.".to_string(),
            ));
        }

        let prompt = build_report_prompt(income, expenses);
        debug!(income, prompt_len = prompt.len(), "Submitting expense report request");

        let markdown = self
            .client
            .generate(&prompt)
            .await
            .map_err(Error::into_service)?;

        info!(
            model = %self.client.model(),
            reply_len = markdown.len(),
            "Generated expense report"
        );

        Ok(GeneratedReport {
            markdown,
            model: self.client.model().to_string(),
        })
    }
}
