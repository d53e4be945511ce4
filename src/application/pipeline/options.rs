//! Pipeline Options
//!
//! Which stages a run executes, and where it runs.

use std::path::PathBuf;

/// Options for the pipeline use case
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory every configured path is relative to
    pub root: PathBuf,
    /// Remove stage directories and the ledger first
    pub reset: bool,
    /// Strip comments from configured sources
    pub clear: bool,
    /// Build combined documents
    pub combine: bool,
    /// Count tokens and rewrite the ledger
    pub tokenize: bool,
}

impl PipelineOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            reset: false,
            clear: false,
            combine: false,
            tokenize: false,
        }
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_combine(mut self, combine: bool) -> Self {
        self.combine = combine;
        self
    }

    pub fn with_tokenize(mut self, tokenize: bool) -> Self {
        self.tokenize = tokenize;
        self
    }

    /// Whether at least one stage is requested
    pub fn has_steps(&self) -> bool {
        self.reset || self.clear || self.combine || self.tokenize
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
