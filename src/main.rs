//! docbundle CLI - documentation bundling pipeline
//!
//! Usage: docbundle <COMMAND>
//!
//! Commands:
//!   run            Run pipeline steps from a config file
//!   tokenize       Count tokens for listed files into a ledger
//!   tokenize-file  Count tokens for one file
//!   tokens         Show the token ledger
//!   write-tokens   Write token counts to a ledger

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docbundle::presentation::{Cli, Commands};

mod commands;

use commands::run::{cmd_run, RunSteps};
use commands::tokens::{
    cmd_tokenize, cmd_tokenize_file, cmd_tokens, cmd_write_tokens, TokenizeArgs,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            init,
            clear,
            combine,
            tokenize,
        } => {
            let steps = RunSteps {
                init,
                clear,
                combine,
                tokenize,
            };
            cmd_run(&config, steps, cli.json, cli.verbose)
        }
        Commands::Tokenize {
            csv,
            endpoint,
            files,
            api_key,
            model,
            timeout,
        } => {
            let args = TokenizeArgs {
                endpoint,
                api_key,
                model,
                timeout,
            };
            cmd_tokenize(&csv, &files, args, cli.json, cli.verbose)
        }
        Commands::TokenizeFile {
            file,
            endpoint,
            api_key,
            model,
            timeout,
        } => {
            let args = TokenizeArgs {
                endpoint,
                api_key,
                model,
                timeout,
            };
            cmd_tokenize_file(&file, args, cli.json)
        }
        Commands::Tokens { csv } => cmd_tokens(&csv, cli.json),
        Commands::WriteTokens { csv, pairs } => cmd_write_tokens(&csv, &pairs, cli.json),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v` when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
