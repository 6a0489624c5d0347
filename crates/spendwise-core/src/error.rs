//! Error types for Spendwise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation service error: {0}")]
    Service(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Collapse transport-level failures into the service variant.
    ///
    /// Callers of the workflow see three cases: configuration, validation,
    /// and service. Anything the HTTP/JSON layers produced belongs to the
    /// third, carrying the underlying message.
    pub fn into_service(self) -> Self {
        match self {
            Error::Config(_) | Error::Validation(_) | Error::Service(_) => self,
            other => Error::Service(other.to_string()),
        }
    }

}

pub type Result<T> = std::result::Result<T, Error>;
