//! Stage value object - the steps of a pipeline run
//!
//! Stages always run in declaration order: reset, clear, combine, tokenize.

use serde::Serialize;

/// One step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Remove stage directories and the token ledger
    Reset,
    /// Strip comments from source files into the cleared directory
    Clear,
    /// Bundle file lists into combined documents
    Combine,
    /// Count tokens and rewrite the ledger
    Tokenize,
}

impl Stage {
    /// Lowercase stage name used in events and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Reset => "reset",
            Stage::Clear => "clear",
            Stage::Combine => "combine",
            Stage::Tokenize => "tokenize",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
