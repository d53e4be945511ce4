//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocbundleError, DocbundleResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DocbundleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for error messages and warnings
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> DocbundleResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DocbundleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (DOCBUNDLE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DOCBUNDLE_DELETE_CLEARED
    if let Some(val) = lookup("DOCBUNDLE_DELETE_CLEARED") {
        config.delete_cleared = val.to_lowercase() != "false" && val != "0";
    }

    // DOCBUNDLE_TOKENIZER_ENDPOINT
    if let Some(endpoint) = lookup("DOCBUNDLE_TOKENIZER_ENDPOINT") {
        if !endpoint.trim().is_empty() {
            config.tokenizer.endpoint = endpoint;
        }
    }

    // DOCBUNDLE_TOKENIZER_TIMEOUT (seconds)
    if let Some(timeout) = lookup("DOCBUNDLE_TOKENIZER_TIMEOUT") {
        match timeout.trim().parse::<u64>() {
            Ok(secs) => config.tokenizer.timeout_secs = secs,
            Err(_) => tracing::warn!(
                value = %timeout,
                "ignoring DOCBUNDLE_TOKENIZER_TIMEOUT, not a number of seconds"
            ),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cleared_folder",
        "combined_folder",
        "combined_extension",
        "tokens_csv",
        "delete_cleared",
        "remove_comments",
        "clear_banner",
        "combinations",
        "name",
        "filelist",
        "comment",
        "tokenizer",
        "endpoint",
        "files",
        "model",
        "timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
