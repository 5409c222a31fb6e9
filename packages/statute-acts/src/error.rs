//! Typed errors for the statute-acts library.
//!
//! Uses `thiserror` for library errors; the binaries wrap these in `anyhow`.

use thiserror::Error;

use openai_client::OpenAIError;

/// Errors from fetching a chapter page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Request never produced a usable response (DNS, connect, timeout, body read)
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    /// Status code for [`FetchError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

/// Errors from asking the text-generation service for a summary.
#[derive(Debug, Error)]
pub enum AiError {
    /// Request to the provider failed
    #[error("generation failed: {0}")]
    Generation(#[from] OpenAIError),

    /// Provider answered with no text
    #[error("empty response from text generator")]
    EmptyResponse,

    /// Reply was not a JSON object of the expected shape
    #[error("invalid summary JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors writing or reading the summaries file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for text-generation operations.
pub type AiResult<T> = std::result::Result<T, AiError>;

/// Result type alias for output operations.
pub type OutputResult<T> = std::result::Result<T, OutputError>;
