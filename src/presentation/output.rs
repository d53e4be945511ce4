//! Output Rendering
//!
//! Summaries printed after a command finishes. Per-item progress is
//! handled by the event sinks; these renderers only produce the closing
//! lines and the ledger table.

use std::path::{Path, PathBuf};

use crate::application::pipeline::PipelineResult;
use crate::config::ConfigWarning;
use crate::domain::entities::TokenLedger;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for rendering pipeline results
pub trait PipelineResultRenderer {
    /// Render the closing summary of a run
    fn render(&self, result: &PipelineResult) -> String;
}

/// Text renderer for pipeline results
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Verbosity level
    pub verbose: u8,
}

impl PipelineResultRenderer for TextRenderer {
    fn render(&self, result: &PipelineResult) -> String {
        let mut lines = Vec::new();

        if self.verbose > 0 {
            lines.push(format!(
                "  {} written, {} up-to-date, {} removed, {} tokenized",
                result.written.len(),
                result.skipped.len(),
                result.removed.len(),
                result.tokenized.len()
            ));
        }

        if result.is_success() {
            lines.push("Workflow completed successfully!".to_string());
        } else {
            let stage = result
                .failed_stage
                .map(|s| s.to_string())
                .unwrap_or_else(|| "pipeline".to_string());
            lines.push(format!(
                "Workflow failed: {} stage reported {} error{}",
                stage,
                result.errors.len(),
                if result.errors.len() == 1 { "" } else { "s" }
            ));
        }

        lines.join("\n")
    }
}

/// JSON renderer for pipeline results
pub struct JsonRenderer;

impl PipelineResultRenderer for JsonRenderer {
    fn render(&self, result: &PipelineResult) -> String {
        let tokenized: Vec<serde_json::Value> = result
            .tokenized
            .iter()
            .map(|(file, tokens)| serde_json::json!({ "file": file, "tokens": tokens }))
            .collect();

        let json = serde_json::json!({
            "event": "complete",
            "status": if result.is_success() { "success" } else { "failed" },
            "failed_stage": result.failed_stage,
            "written": display_paths(&result.written),
            "skipped": display_paths(&result.skipped),
            "removed": display_paths(&result.removed),
            "tokenized": tokenized,
            "warnings": result.warnings,
            "errors": result.errors,
        });

        json.to_string()
    }
}

fn display_paths(items: &[PathBuf]) -> Vec<String> {
    items.iter().map(|p| p.display().to_string()).collect()
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn PipelineResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Ledger as an aligned table, or a notice when it is empty
pub fn format_ledger_table(ledger: &TokenLedger) -> String {
    if ledger.is_empty() {
        return "No token data found".to_string();
    }

    let file_width = ledger
        .entries()
        .map(|(file, _)| file.chars().count())
        .max()
        .unwrap_or(0)
        .max(50);
    let rule = "-".repeat(file_width + 1 + 15 + 1 + 20);

    let mut lines = vec![
        "Token Counts".to_string(),
        rule.clone(),
        format!(
            "{:<fw$} {:>15} {:>20}",
            "File",
            "Tokens",
            "Last Updated",
            fw = file_width
        ),
        rule.clone(),
    ];
    for (file, entry) in ledger.entries() {
        lines.push(format!(
            "{:<fw$} {:>15} {:>20}",
            file,
            entry.tokens(),
            entry.time(),
            fw = file_width
        ));
    }
    lines.push(rule);

    lines.join("\n")
}

/// Ledger as JSON rows
pub fn ledger_json(ledger: &TokenLedger) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = ledger
        .entries()
        .map(|(file, entry)| {
            serde_json::json!({
                "file": file,
                "tokens": entry.tokens(),
                "time": entry.time(),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

/// Unknown-key warnings, one block per key
pub fn format_config_warnings(path: &Path, warnings: &[ConfigWarning]) -> Vec<String> {
    let mut lines = Vec::new();
    for w in warnings {
        if let Some(line) = w.line {
            lines.push(format!(
                "Warning: unknown config key '{}' in {}:{}",
                w.key,
                path.display(),
                line
            ));
        } else {
            lines.push(format!(
                "Warning: unknown config key '{}' in {}",
                w.key,
                path.display()
            ));
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}
