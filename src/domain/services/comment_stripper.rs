//! Comment stripping for source documents
//!
//! Removes every `<!-- ... -->` span. Matching is non-greedy and spans
//! lines: a comment ends at the first `-->` after its opener, so a nested
//! `<!--` does not extend it. An opener with no closer is left as is.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

/// Remove all terminated HTML comments from `text`.
pub fn remove_comments(text: &str) -> Cow<'_, str> {
    COMMENT.replace_all(text, "")
}

/// Strips comments and optionally prepends a provenance banner line
#[derive(Debug, Clone, Default)]
pub struct CommentStripper {
    banner: Option<String>,
}

impl CommentStripper {
    /// Stripper without a banner
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `banner` (as its own line) to every stripped document
    pub fn with_banner(banner: Option<String>) -> Self {
        Self {
            banner: banner.filter(|b| !b.is_empty()),
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Strip comments from `text`, prefixing the banner when configured
    pub fn strip(&self, text: &str) -> String {
        let stripped = remove_comments(text);
        match &self.banner {
            Some(banner) => format!("{}\n{}", banner, stripped),
            None => stripped.into_owned(),
        }
    }
}
