//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PipelineUseCase` - reset, clear, combine and tokenize in fixed order

pub mod pipeline;

pub use pipeline::{PipelineOptions, PipelineResult, PipelineUseCase};
