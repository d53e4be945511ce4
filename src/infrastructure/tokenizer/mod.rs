//! Tokenizer Implementations
//!
//! Concrete implementations of the Tokenizer port.

mod http;

pub use http::{
    parse_total_tokens, HttpTokenizer, API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
