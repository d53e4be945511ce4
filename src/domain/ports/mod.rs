//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod ledger_repository;
pub mod pipeline_events;
pub mod tokenizer;

pub use file_system::{FileSystem, FsError, FsResult};
pub use ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
pub use tokenizer::{Tokenizer, TokenizerError};
