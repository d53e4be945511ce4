//! Repository Implementations
//!
//! Concrete implementations of repository ports.

mod ledger;

pub use ledger::{parse_ledger, render_ledger, CsvLedgerRepository};
