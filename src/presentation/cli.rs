//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infrastructure::tokenizer::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// docbundle - strip HTML comments, bundle docs into XML, track token counts
#[derive(Parser, Debug)]
#[command(name = "docbundle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run pipeline steps (reset, clear, combine, tokenize) in fixed order
    Run {
        /// Path to the TOML config file
        #[arg(short, long)]
        config: PathBuf,

        /// Remove the cleared and combined folders and the token ledger first
        #[arg(long)]
        init: bool,

        /// Strip HTML comments from configured files
        #[arg(long)]
        clear: bool,

        /// Bundle configured file lists into combined documents
        #[arg(long)]
        combine: bool,

        /// Count tokens for configured files (requires MOONSHOT_API_KEY)
        #[arg(long, alias = "tokenizer")]
        tokenize: bool,
    },

    /// Count tokens for a list of files and merge them into a ledger
    ///
    /// The ledger is only rewritten when every file was counted.
    Tokenize {
        /// Path to the tokens CSV file
        csv: PathBuf,

        /// Token-count API endpoint
        endpoint: String,

        /// Files to tokenize
        #[arg(required = true)]
        files: Vec<String>,

        /// API key (defaults to MOONSHOT_API_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Model name sent with each request
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Count tokens for a single file
    TokenizeFile {
        /// File to tokenize
        file: PathBuf,

        /// Token-count API endpoint
        #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// API key (defaults to MOONSHOT_API_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Model name sent with the request
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Show the token ledger as a table
    #[command(alias = "read-tokens")]
    Tokens {
        /// Path to the tokens CSV file
        csv: PathBuf,
    },

    /// Write token counts to a ledger, replacing its contents
    WriteTokens {
        /// Path to the tokens CSV file
        csv: PathBuf,

        /// Entries in `file:tokens` form
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}
