//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::time::Duration;

use crate::application::pipeline::PipelineUseCase;
use crate::config::TokenizerConfig;
use crate::domain::ports::{PipelineEventSink, TokenizerError};
use crate::infrastructure::{
    ConsoleEventSink, CsvLedgerRepository, HttpTokenizer, JsonEventSink, LocalFs,
};

/// Type alias for the concrete PipelineUseCase with all dependencies
pub type ConcretePipelineUseCase =
    PipelineUseCase<LocalFs, HttpTokenizer, CsvLedgerRepository<LocalFs>>;

/// Create a pipeline use case on the local file system
///
/// Pass `None` when the run does not tokenize; no HTTP client is built then.
pub fn create_pipeline_use_case(tokenizer: Option<HttpTokenizer>) -> ConcretePipelineUseCase {
    PipelineUseCase::new(LocalFs::new(), tokenizer, CsvLedgerRepository::new())
}

/// Build the HTTP tokenizer described by a `[tokenizer]` table
pub fn create_tokenizer(
    config: &TokenizerConfig,
    api_key: &str,
) -> Result<HttpTokenizer, TokenizerError> {
    HttpTokenizer::new(
        config.endpoint.clone(),
        api_key,
        config.model.clone(),
        Duration::from_secs(config.timeout_secs),
    )
}

/// Event sink for the selected output mode
pub fn create_event_sink(json: bool, verbose: u8) -> Box<dyn PipelineEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(verbose))
    }
}
