//! Console Event Sink
//!
//! Human-readable progress lines. Every write is announced; up-to-date
//! outputs and stage headers only show up in verbose mode.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Event sink that prints text lines
pub struct ConsoleEventSink {
    verbose: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout(verbose: u8) -> Self {
        Self::with_writer(verbose, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbose: u8, writer: W) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Text for an event, or `None` if it is hidden at this verbosity
    pub fn format_event(&self, event: &PipelineEvent) -> Option<String> {
        match event {
            PipelineEvent::StageStarted { stage } if self.verbose > 0 => {
                Some(format!("==> {}", stage))
            }
            PipelineEvent::StageStarted { .. } => None,
            PipelineEvent::Written { path, .. } => Some(format!("Updated: {}", path.display())),
            PipelineEvent::Skipped { path, .. } if self.verbose > 0 => {
                Some(format!("Skipped: {}", path.display()))
            }
            PipelineEvent::Skipped { .. } => None,
            PipelineEvent::Removed { path, .. } => Some(format!("Removed: {}", path.display())),
            PipelineEvent::Warning { message, .. } => Some(format!("Warning: {}", message)),
            PipelineEvent::ItemFailed { path, error, .. } => {
                Some(format!("Error: {}: {}", path.display(), error))
            }
            PipelineEvent::Tokenized { file, tokens } => {
                Some(format!("{}: {} tokens", file, tokens))
            }
            PipelineEvent::LedgerWritten { path, entries } => Some(format!(
                "Saved {} entr{} to {}",
                entries,
                if *entries == 1 { "y" } else { "ies" },
                path.display()
            )),
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let Some(line) = self.format_event(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
