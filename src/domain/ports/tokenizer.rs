//! Tokenizer port - abstraction over the remote token-count API
//!
//! The pipeline only needs "text in, count out". Transport, authentication
//! and response decoding belong to the infrastructure implementation.

use thiserror::Error;

/// Tokenizer call errors
///
/// Every variant means "no count for this file"; the caller decides
/// whether that aborts the surrounding step.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or other transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Response JSON had no integer `data.total_tokens`
    #[error("response has no data.total_tokens")]
    MissingCount,
}

/// Counts tokens for a piece of text
pub trait Tokenizer {
    /// Return the token count for `content`
    fn count_tokens(&self, content: &str) -> Result<u64, TokenizerError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn count_tokens(&self, content: &str) -> Result<u64, TokenizerError> {
        (**self).count_tokens(content)
    }
}
