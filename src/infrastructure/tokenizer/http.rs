//! HTTP tokenizer client
//!
//! POSTs `{model, messages: [{role: "user", content}]}` with a bearer token
//! and reads the count from `data.total_tokens`. Every request carries an
//! explicit timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{Tokenizer, TokenizerError};

/// Default endpoint of the estimate-token-count API
pub const DEFAULT_ENDPOINT: &str = "https://api.moonshot.cn/v1/tokenizers/estimate-token-count";
/// Default model name sent with every request
pub const DEFAULT_MODEL: &str = "kimi-k2.5";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "MOONSHOT_API_KEY";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    data: Option<TokenizeData>,
}

#[derive(Debug, Deserialize)]
struct TokenizeData {
    total_tokens: Option<u64>,
}

/// Extract `data.total_tokens` from a response body
pub fn parse_total_tokens(body: &str) -> Result<u64, TokenizerError> {
    let response: TokenizeResponse =
        serde_json::from_str(body).map_err(|e| TokenizerError::Decode(e.to_string()))?;
    response
        .data
        .and_then(|d| d.total_tokens)
        .ok_or(TokenizerError::MissingCount)
}

fn map_transport(err: reqwest::Error) -> TokenizerError {
    if err.is_timeout() {
        TokenizerError::Timeout
    } else {
        TokenizerError::Transport(err.to_string())
    }
}

/// Blocking HTTP implementation of the `Tokenizer` port
pub struct HttpTokenizer {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpTokenizer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TokenizerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    #[cfg(test)]
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Tokenizer for HttpTokenizer {
    fn count_tokens(&self, content: &str) -> Result<u64, TokenizerError> {
        let request = TokenizeRequest {
            model: &self.model,
            messages: [Message {
                role: "user",
                content,
            }],
        };

        tracing::debug!(endpoint = %self.endpoint, bytes = content.len(), "requesting token count");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TokenizerError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(map_transport)?;
        parse_total_tokens(&body)
    }
}
