//! Path category value object
//!
//! Which pipeline stage produced a file, and how it is shown when embedded
//! into a combined document.

use serde::Serialize;

/// Stage that produced a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCategory {
    /// Original source file
    Raw,
    /// Output of comment stripping, mirrored under the cleared directory
    Cleared,
    /// Output of bundling, under the combined directory
    Combined,
}

impl PathCategory {
    /// Element name used when the file is embedded in a combined document
    pub fn element_name(&self) -> &'static str {
        match self {
            PathCategory::Combined => "group",
            PathCategory::Raw | PathCategory::Cleared => "file",
        }
    }
}

impl std::fmt::Display for PathCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathCategory::Raw => write!(f, "raw"),
            PathCategory::Cleared => write!(f, "cleared"),
            PathCategory::Combined => write!(f, "combined"),
        }
    }
}

/// A path together with its category and the path to display for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath {
    pub category: PathCategory,
    pub display_path: String,
}

impl ClassifiedPath {
    pub fn new(category: PathCategory, display_path: impl Into<String>) -> Self {
        Self {
            category,
            display_path: display_path.into(),
        }
    }
}
