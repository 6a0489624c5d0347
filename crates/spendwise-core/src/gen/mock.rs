//! Mock backend for testing
//!
//! Returns a configurable canned reply (or failure) and counts calls, so
//! tests can assert both what came back and whether a call was made at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::GenerationBackend;

/// Default canned reply, shaped like a real report
const DEFAULT_REPLY: &str = "\
| STT | Nội dung | Số tiền (VNĐ) |\n\
|-----|----------|---------------|\n\
| 1 | Tiền nhà | 5.000.000 |\n\
| 2 | Ăn sáng | 30.000 |\n\n\
**Tổng chi:** 5.030.000 VNĐ\n\
**Số tiền dư còn lại:** 4.970.000 VNĐ\n";

/// Mock generation backend for testing
///
/// Clones share the call counter, so a test can keep one handle and hand
/// another to the workflow under test.
#[derive(Clone, Default)]
pub struct MockBackend {
    reply: Option<String>,
    failure: Option<String>,
    unhealthy: bool,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Create a new mock backend (healthy, default reply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that replies with the given text
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::default()
        }
    }

    /// Create a mock whose generate call fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    /// Create a new instance with a different model (no-op for mock)
    pub fn with_model(&self, _model: &str) -> Self {
        self.clone()
    }

    /// Number of generate calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(Error::Service(message.clone()));
        }

        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| DEFAULT_REPLY.to_string()))
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
