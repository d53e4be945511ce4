//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert one event into its JSON object
pub fn event_to_json(event: &PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::StageStarted { stage } => serde_json::json!({
            "event": "stage_start",
            "stage": stage,
        }),

        PipelineEvent::Written { stage, path } => serde_json::json!({
            "event": "item_written",
            "stage": stage,
            "path": path.display().to_string(),
        }),

        PipelineEvent::Skipped { stage, path } => serde_json::json!({
            "event": "item_skipped",
            "stage": stage,
            "path": path.display().to_string(),
            "reason": "up-to-date",
        }),

        PipelineEvent::Removed { stage, path } => serde_json::json!({
            "event": "removed",
            "stage": stage,
            "path": path.display().to_string(),
        }),

        PipelineEvent::Warning { stage, message } => serde_json::json!({
            "event": "warning",
            "stage": stage,
            "message": message,
        }),

        PipelineEvent::ItemFailed { stage, path, error } => serde_json::json!({
            "event": "item_error",
            "stage": stage,
            "path": path.display().to_string(),
            "error": error,
        }),

        PipelineEvent::Tokenized { file, tokens } => serde_json::json!({
            "event": "tokenized",
            "stage": "tokenize",
            "file": file,
            "tokens": tokens,
        }),

        PipelineEvent::LedgerWritten { path, entries } => serde_json::json!({
            "event": "ledger_written",
            "stage": "tokenize",
            "path": path.display().to_string(),
            "entries": entries,
        }),
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.write_event(event_to_json(&event));
    }
}
