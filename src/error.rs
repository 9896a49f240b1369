//! Error handling and custom error types
//!
//! Every failure an analysis can end in is a variant of [`Error`]; its
//! `Display` text is the single message shown to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Gemini quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Model returned an empty response: {0}")]
    EmptyResponse(String),

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini rejected the API key: {0}")]
    ApiKeyRejected(String),

    #[error("Analysis cancelled")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_api_key() -> Self {
        Error::Configuration(
            "Gemini API key not found. Set GEMINI_API_KEY (or VITE_GEMINI_API_KEY) in the environment or .env file".to_string(),
        )
    }

    /// Classify a non-success `generateContent` reply.
    ///
    /// Quota exhaustion is recognised by status 429 or by the `429` /
    /// `RESOURCE_EXHAUSTED` markers Gemini puts in the error body.
    pub fn from_api_failure(status: u16, body: &str) -> Self {
        if status == 429 || body.contains("429") || body.contains("RESOURCE_EXHAUSTED") {
            return Error::QuotaExceeded(format!("status {}: {}", status, body));
        }
        if body.contains("API key") {
            return Error::ApiKeyRejected(body.to_string());
        }
        Error::Api {
            status,
            message: body.to_string(),
        }
    }

    /// Whether the retry loop may reissue the request after this error.
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, Error::QuotaExceeded(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
