//! Error types for docbundle
//!
//! Library code returns `DocbundleError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, LedgerError, TokenizerError};
use crate::domain::value_objects::PathError;

/// Result type alias for docbundle operations
pub type DocbundleResult<T> = Result<T, DocbundleError>;

/// Main error type for docbundle operations
#[derive(Error, Debug)]
pub enum DocbundleError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration parsed but failed validation
    #[error("configuration error: {0}")]
    ConfigValidation(String),

    /// Required credential is missing from the environment
    #[error("missing environment variable {0}")]
    MissingCredential(&'static str),

    /// A configured path cannot be mirrored or used as an output name
    #[error("unsafe path '{path}': {source}")]
    UnsafePath {
        path: PathBuf,
        #[source]
        source: PathError,
    },

    /// File system failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Token ledger failure
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Tokenizing one file failed, aborting the tokenize step
    #[error("tokenizing {file} failed: {source}")]
    Tokenize {
        file: String,
        #[source]
        source: TokenizerError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
