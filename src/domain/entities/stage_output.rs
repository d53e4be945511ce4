//! StageOutput entity - a computed cleared file or combined document
//!
//! Stage outputs are recomputed on every run. The orchestrator decides
//! whether one is persisted; the stage that produced it never writes.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Stage;

/// A computed output ready to be compared with disk and maybe written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    /// Stage that produced this output
    stage: Stage,
    /// Destination path, relative to the project root
    path: PathBuf,
    /// Full text content
    content: String,
}

impl StageOutput {
    /// Create a new StageOutput
    pub fn new(stage: Stage, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            stage,
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the producing stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }
}
