//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - CSV token ledger
//! - `tokenizer/` - HTTP client for the token-count API
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod fs;
pub mod repositories;
pub mod tokenizer;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use repositories::CsvLedgerRepository;
pub use tokenizer::HttpTokenizer;
