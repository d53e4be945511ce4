//! Run command handler
//!
//! Loads the config, checks the credential when tokenizing, then runs the
//! pipeline stages in fixed order.

use std::path::Path;

use anyhow::{bail, Context, Result};

use docbundle::application::pipeline::PipelineOptions;
use docbundle::config::Config;
use docbundle::error::DocbundleError;
use docbundle::infrastructure::tokenizer::API_KEY_VAR;
use docbundle::presentation::output::{create_renderer, format_config_warnings, OutputFormat};
use docbundle::presentation::{create_event_sink, create_pipeline_use_case, create_tokenizer};

/// Steps requested on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSteps {
    pub init: bool,
    pub clear: bool,
    pub combine: bool,
    pub tokenize: bool,
}

/// Execute the run command
pub fn cmd_run(config_path: &Path, steps: RunSteps, json: bool, verbose: u8) -> Result<()> {
    let options = PipelineOptions::new(".")
        .with_reset(steps.init)
        .with_clear(steps.clear)
        .with_combine(steps.combine)
        .with_tokenize(steps.tokenize);

    if !options.has_steps() {
        bail!("At least one of --init, --clear, --combine, --tokenize must be specified");
    }

    let (config, warnings) = Config::load_with_warnings(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    if !json {
        for line in format_config_warnings(config_path, &warnings) {
            eprintln!("{}", line);
        }
    }

    let config = config.with_env_overrides();
    config.validate()?;

    // Credential problems abort before any stage touches the file system
    let tokenizer = if steps.tokenize {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(DocbundleError::MissingCredential(API_KEY_VAR))?;
        let tokenizer = create_tokenizer(&config.tokenizer, &api_key)
            .context("Failed to build HTTP client")?;
        Some(tokenizer)
    } else {
        None
    };

    let use_case = create_pipeline_use_case(tokenizer);
    let sink = create_event_sink(json, verbose);
    let result = use_case.execute(&config, &options, sink.as_ref());

    let renderer = create_renderer(OutputFormat::from_json_flag(json), verbose);
    println!("{}", renderer.render(&result));

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
