//! Configuration module for docbundle
//!
//! Precedence:
//! 1. Environment variables (DOCBUNDLE_*)
//! 2. The TOML file passed with `--config`
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::{apply_env_overrides, parse_with_warnings, ConfigWarning};
pub use types::{CombinationConfig, Config, TokenizerConfig};
