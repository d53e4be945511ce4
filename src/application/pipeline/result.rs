//! Pipeline Result
//!
//! Result types for pipeline runs.

use std::path::PathBuf;

use crate::domain::value_objects::Stage;

/// Result of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    /// Outputs that were written
    pub written: Vec<PathBuf>,
    /// Outputs that were skipped (up-to-date)
    pub skipped: Vec<PathBuf>,
    /// Directories and files removed by reset or cleanup
    pub removed: Vec<PathBuf>,
    /// Token counts gathered by the tokenize stage
    pub tokenized: Vec<(String, u64)>,
    /// Recovered problems (cleanup failures)
    pub warnings: Vec<String>,
    /// Errors encountered
    pub errors: Vec<String>,
    /// Stage that failed and stopped the run
    pub failed_stage: Option<Stage>,
}

impl PipelineResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty() || !self.removed.is_empty()
    }
}
