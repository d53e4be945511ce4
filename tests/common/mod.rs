//! Common test utilities for docbundle CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - `TokenServer`: one-shot local HTTP server standing in for the tokenizer API

#![allow(dead_code)]

pub mod env;
pub mod server;

pub use env::*;
pub use server::*;
