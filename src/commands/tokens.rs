//! Token command handlers
//!
//! Single-file tokenization and direct ledger access, outside of a
//! configured pipeline run.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use docbundle::domain::entities::{LedgerEntry, TokenLedger, LEDGER_TIME_FORMAT};
use docbundle::domain::ports::{FileSystem, LedgerRepository, Tokenizer};
use docbundle::error::DocbundleError;
use docbundle::infrastructure::tokenizer::API_KEY_VAR;
use docbundle::infrastructure::{CsvLedgerRepository, HttpTokenizer, LocalFs};
use docbundle::presentation::output::{
    create_renderer, format_ledger_table, ledger_json, OutputFormat,
};
use docbundle::presentation::{create_event_sink, create_pipeline_use_case};

/// Request settings shared by the tokenize commands
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: u64,
}

impl TokenizeArgs {
    /// Build the client; the key falls back to `MOONSHOT_API_KEY`
    fn tokenizer(self) -> Result<HttpTokenizer> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_VAR).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(DocbundleError::MissingCredential(API_KEY_VAR))?;

        HttpTokenizer::new(
            self.endpoint,
            api_key,
            self.model,
            Duration::from_secs(self.timeout),
        )
        .context("Failed to build HTTP client")
    }
}

/// Execute the tokenize command
///
/// Counts every file, then merges the counts into the ledger at `csv`.
/// Any failure leaves the ledger as it was.
pub fn cmd_tokenize(
    csv: &Path,
    files: &[String],
    args: TokenizeArgs,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let tokenizer = args.tokenizer()?;

    let use_case = create_pipeline_use_case(Some(tokenizer));
    let sink = create_event_sink(json, verbose);
    let result = use_case.tokenize_files(Path::new("."), csv, files, sink.as_ref());

    let renderer = create_renderer(OutputFormat::from_json_flag(json), verbose);
    println!("{}", renderer.render(&result));

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the tokenize-file command
pub fn cmd_tokenize_file(file: &Path, args: TokenizeArgs, json: bool) -> Result<()> {
    let tokenizer = args.tokenizer()?;

    let content = LocalFs::new()
        .read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let tokens = tokenizer
        .count_tokens(&content)
        .map_err(|source| DocbundleError::Tokenize {
            file: file.display().to_string(),
            source,
        })?;

    if json {
        let value = serde_json::json!({
            "event": "tokenized",
            "file": file.display().to_string(),
            "tokens": tokens,
        });
        println!("{}", value);
    } else {
        println!("{}: {} tokens", file.display(), tokens);
    }

    Ok(())
}

/// Execute the tokens command
pub fn cmd_tokens(csv: &Path, json: bool) -> Result<()> {
    let ledger = CsvLedgerRepository::new()
        .load(csv)
        .with_context(|| format!("Failed to read {}", csv.display()))?;

    if json {
        println!("{}", ledger_json(&ledger));
    } else {
        println!("{}", format_ledger_table(&ledger));
    }

    Ok(())
}

/// Execute the write-tokens command
///
/// The ledger is rebuilt from the given pairs only.
pub fn cmd_write_tokens(csv: &Path, pairs: &[String], json: bool) -> Result<()> {
    let now = chrono::Local::now().format(LEDGER_TIME_FORMAT).to_string();

    let mut ledger = TokenLedger::new();
    for pair in pairs {
        let (file, tokens) = parse_pair(pair)?;
        ledger.upsert(file, LedgerEntry::new(tokens, now.clone()));
    }

    CsvLedgerRepository::new()
        .save(&ledger, csv)
        .with_context(|| format!("Failed to write {}", csv.display()))?;

    if json {
        let value = serde_json::json!({
            "event": "ledger_written",
            "path": csv.display().to_string(),
            "entries": ledger.len(),
        });
        println!("{}", value);
    } else {
        println!("Wrote {} entries to {}", ledger.len(), csv.display());
    }

    Ok(())
}

/// Split `file:tokens` at the last colon
fn parse_pair(pair: &str) -> Result<(String, u64)> {
    let Some((file, tokens)) = pair.rsplit_once(':') else {
        bail!("Invalid format: {}. Expected 'file:tokens'", pair);
    };
    if file.is_empty() {
        bail!("Invalid format: {}. File name is empty", pair);
    }
    let tokens = tokens
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid token count in '{}'", pair))?;
    Ok((file.to_string(), tokens))
}
