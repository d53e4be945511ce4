//! docbundle - documentation bundling pipeline
//!
//! Strips HTML comments from source files, bundles file lists into
//! XML-wrapped documents, and keeps a CSV ledger of token counts fetched
//! from a remote tokenizer. Every output is written only when its content
//! changed, so repeated runs are cheap.
//!
//! ## Layers
//!
//! - `domain` - pipeline logic and ports, no direct I/O
//! - `infrastructure` - file system, HTTP tokenizer, CSV ledger, event sinks
//! - `application` - the pipeline use case
//! - `config` - TOML configuration
//! - `presentation` - CLI definition, wiring, output rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::pipeline::{PipelineOptions, PipelineResult, PipelineUseCase};
pub use config::Config;
pub use error::{DocbundleError, DocbundleResult};
