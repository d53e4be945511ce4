//! Pipeline Module
//!
//! Runs the stages in fixed order: reset, clear, combine, tokenize.
//!
//! ## Structure
//!
//! - `options` - Which stages to run (`PipelineOptions`)
//! - `result` - What happened (`PipelineResult`)
//! - `use_case` - Stage sequencing (`PipelineUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use docbundle::application::pipeline::{PipelineOptions, PipelineUseCase};
//!
//! let use_case = PipelineUseCase::new(fs, Some(tokenizer), ledger_repo);
//! let result = use_case.execute(&config, &PipelineOptions::new(".").with_clear(true), &sink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::PipelineOptions;
pub use result::PipelineResult;
pub use use_case::PipelineUseCase;
