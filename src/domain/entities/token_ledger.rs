//! TokenLedger entity - tracks token counts per file
//!
//! The ledger is a pure data structure. Persistence is handled by a
//! `LedgerRepository`. Entries are keyed by the configured file path and
//! iterate in plain alphabetical (byte) order of that path.

use std::collections::BTreeMap;

/// Timestamp format used for ledger entries
pub const LEDGER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Token count for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    tokens: u64,
    time: String,
}

impl LedgerEntry {
    pub fn new(tokens: u64, time: impl Into<String>) -> Self {
        Self {
            tokens,
            time: time.into(),
        }
    }

    /// Token count
    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    /// When the count was last updated
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Ordered table of file path -> token count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLedger {
    entries: BTreeMap<String, LedgerEntry>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `file`
    pub fn upsert(&mut self, file: impl Into<String>, entry: LedgerEntry) {
        self.entries.insert(file.into(), entry);
    }

    pub fn get(&self, file: &str) -> Option<&LedgerEntry> {
        self.entries.get(file)
    }

    /// Iterate entries in sorted order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LedgerEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
