//! LedgerRepository port - abstraction for token ledger persistence
//!
//! This trait allows the pipeline to load/save the token ledger
//! without knowing about the tabular file format.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::TokenLedger;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Ledger file could not be read or written
    #[error("ledger I/O error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Ledger file is not a valid table
    #[error("invalid ledger format in {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },

    /// A row carries a token count that is not a non-negative integer
    #[error("invalid token count '{value}' for {file}")]
    InvalidCount { file: String, value: String },
}

/// Abstract repository for ledger persistence
///
/// The ledger maps file paths to their last known token count.
pub trait LedgerRepository {
    /// Load the ledger, or an empty one if the file does not exist
    fn load(&self, path: &Path) -> LedgerResult<TokenLedger>;

    /// Replace the ledger file with `ledger` in full
    fn save(&self, ledger: &TokenLedger, path: &Path) -> LedgerResult<()>;
}
