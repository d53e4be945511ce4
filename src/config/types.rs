//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::CombinationSpec;
use crate::domain::services::normalize_lexically;
use crate::domain::value_objects::SafePath;
use crate::error::{DocbundleError, DocbundleResult};
use crate::infrastructure::tokenizer::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

use super::loader::{self, ConfigWarning};

/// One `[[combinations]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationConfig {
    pub name: String,

    #[serde(default)]
    pub filelist: Vec<String>,

    #[serde(default)]
    pub comment: Option<String>,
}

/// `[tokenizer]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub files: Vec<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            files: Vec::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_combined_extension() -> String {
    ".xml".to_string()
}

fn default_tokens_csv() -> String {
    "tokens.csv".to_string()
}

/// Pipeline configuration
///
/// `cleared_folder` and `combined_folder` are required; everything else
/// has a default. All paths are relative to the directory the pipeline
/// runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub cleared_folder: String,

    pub combined_folder: String,

    #[serde(default = "default_combined_extension")]
    pub combined_extension: String,

    #[serde(default = "default_tokens_csv")]
    pub tokens_csv: String,

    #[serde(default)]
    pub delete_cleared: bool,

    #[serde(default)]
    pub remove_comments: Vec<String>,

    /// Line prepended to every cleared file
    #[serde(default)]
    pub clear_banner: Option<String>,

    #[serde(default)]
    pub combinations: Vec<CombinationConfig>,

    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleared_folder: "cleared".to_string(),
            combined_folder: "combined".to_string(),
            combined_extension: default_combined_extension(),
            tokens_csv: default_tokens_csv(),
            delete_cleared: false,
            remove_comments: Vec::new(),
            clear_banner: None,
            combinations: Vec::new(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DocbundleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DocbundleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (DOCBUNDLE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check everything the pipeline relies on before any stage runs
    pub fn validate(&self) -> DocbundleResult<()> {
        let cleared = stage_folder("cleared_folder", &self.cleared_folder)?;
        let combined = stage_folder("combined_folder", &self.combined_folder)?;
        // reset and delete_cleared remove whole trees, so neither may hold the other
        if cleared.starts_with(&combined) || combined.starts_with(&cleared) {
            return Err(DocbundleError::ConfigValidation(format!(
                "cleared_folder '{}' and combined_folder '{}' must be separate directories",
                self.cleared_folder, self.combined_folder
            )));
        }
        if self.combined_extension.contains(['/', '\\']) {
            return Err(DocbundleError::ConfigValidation(format!(
                "combined_extension '{}' must not contain path separators",
                self.combined_extension
            )));
        }

        self.sources()?;

        let mut seen = std::collections::BTreeSet::new();
        for combination in &self.combinations {
            safe_path(&combination.name)?;
            if !seen.insert(combination.name.as_str()) {
                return Err(DocbundleError::ConfigValidation(format!(
                    "duplicate combination name '{}'",
                    combination.name
                )));
            }
        }

        if self.tokenizer.timeout_secs == 0 {
            return Err(DocbundleError::ConfigValidation(
                "tokenizer.timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Source files to strip, as paths that can be mirrored under the
    /// cleared directory
    pub fn sources(&self) -> DocbundleResult<Vec<SafePath>> {
        self.remove_comments.iter().map(|s| safe_path(s)).collect()
    }

    /// Combination specs in configured order
    pub fn combinations(&self) -> Vec<CombinationSpec> {
        self.combinations
            .iter()
            .map(|c| {
                CombinationSpec::new(c.name.clone(), c.filelist.clone())
                    .with_comment(c.comment.clone())
            })
            .collect()
    }
}

/// Normalized stage folder. Blank folders, folders that normalize to the
/// working directory or one of its parents, and the file system root are
/// rejected.
fn stage_folder(key: &str, raw: &str) -> DocbundleResult<PathBuf> {
    let normalized = normalize_lexically(raw);
    let escapes = matches!(normalized.components().next(), Some(Component::ParentDir));
    if raw.trim().is_empty()
        || normalized.as_os_str().is_empty()
        || normalized.parent().is_none()
        || escapes
    {
        return Err(DocbundleError::ConfigValidation(format!(
            "{} '{}' must be a directory of its own, not '.', '..' or '/'",
            key, raw
        )));
    }
    Ok(normalized)
}

fn safe_path(raw: &str) -> DocbundleResult<SafePath> {
    SafePath::new(raw).map_err(|source| DocbundleError::UnsafePath {
        path: raw.into(),
        source,
    })
}
