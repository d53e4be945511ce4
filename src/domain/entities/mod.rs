//! Domain Entities
//!
//! - `CombinationSpec` - a named bundle of input files
//! - `StageOutput` - a computed cleared file or combined document
//! - `TokenLedger` - token counts per file

mod combination;
mod stage_output;
mod token_ledger;

pub use combination::CombinationSpec;
pub use stage_output::StageOutput;
pub use token_ledger::{LedgerEntry, TokenLedger, LEDGER_TIME_FORMAT};
