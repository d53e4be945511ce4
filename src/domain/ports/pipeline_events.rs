//! Pipeline Event Port
//!
//! Provides an observable interface for pipeline runs.
//! Enables console announcements, JSON event streams, and quiet test runs.

use std::path::PathBuf;

use crate::domain::value_objects::Stage;

/// Event emitted during a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A stage started
    StageStarted { stage: Stage },

    /// A stage output was persisted
    Written { stage: Stage, path: PathBuf },

    /// A stage output already matched the file on disk
    Skipped { stage: Stage, path: PathBuf },

    /// A directory or file was removed (reset or post-combine cleanup)
    Removed { stage: Stage, path: PathBuf },

    /// A recoverable problem (e.g. cleanup failure)
    Warning { stage: Stage, message: String },

    /// One item of a stage failed
    ItemFailed {
        stage: Stage,
        path: PathBuf,
        error: String,
    },

    /// A file's tokens were counted
    Tokenized { file: String, tokens: u64 },

    /// The token ledger was rewritten
    LedgerWritten { path: PathBuf, entries: usize },
}

/// Trait for receiving pipeline events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PipelineEventSink {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
