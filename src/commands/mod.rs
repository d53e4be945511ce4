//! Command handlers, one per subcommand

pub mod run;
pub mod tokens;
