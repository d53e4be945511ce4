//! CSV Ledger Repository
//!
//! Implements the LedgerRepository port as a CSV table with the header
//! `file,tokens,time`. Saving always rewrites the whole file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{LedgerEntry, TokenLedger};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
use crate::infrastructure::fs::LocalFs;

/// CSV representation of a ledger row
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    file: String,
    tokens: String,
    time: String,
}

/// CSV-based ledger repository
pub struct CsvLedgerRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl CsvLedgerRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for CsvLedgerRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> CsvLedgerRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

/// Parse ledger CSV text
pub fn parse_ledger(content: &str, path: &Path) -> LedgerResult<TokenLedger> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut ledger = TokenLedger::new();

    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| LedgerError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let tokens = row
            .tokens
            .trim()
            .parse::<u64>()
            .map_err(|_| LedgerError::InvalidCount {
                file: row.file.clone(),
                value: row.tokens.clone(),
            })?;
        ledger.upsert(row.file, LedgerEntry::new(tokens, row.time));
    }

    Ok(ledger)
}

/// Render the ledger as CSV text, header first, rows sorted by path
pub fn render_ledger(ledger: &TokenLedger, path: &Path) -> LedgerResult<String> {
    let format_err = |message: String| LedgerError::InvalidFormat {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["file", "tokens", "time"])
        .map_err(|e| format_err(e.to_string()))?;
    for (file, entry) in ledger.entries() {
        let tokens = entry.tokens().to_string();
        writer
            .write_record([file, tokens.as_str(), entry.time()])
            .map_err(|e| format_err(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format_err(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| format_err(e.to_string()))
}

impl<FS: FileSystem> LedgerRepository for CsvLedgerRepository<FS> {
    fn load(&self, path: &Path) -> LedgerResult<TokenLedger> {
        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return Ok(TokenLedger::new()),
            Err(e) => {
                return Err(LedgerError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        parse_ledger(&content, path)
    }

    fn save(&self, ledger: &TokenLedger, path: &Path) -> LedgerResult<()> {
        let content = render_ledger(ledger, path)?;
        self.fs.write(path, &content).map_err(|e| LedgerError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
