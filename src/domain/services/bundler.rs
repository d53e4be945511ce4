//! Bundling of file lists into combined documents
//!
//! Each input becomes one element, in configured order:
//!
//! ```text
//! <!--comment-->                                  (optional)
//! <group path="combined/x.xml">...</group>          combined input, verbatim
//! <file path="/a.md" note="..."><![CDATA[...]]></file>   cleared input
//! <file path="docs/b.md"><![CDATA[...]]></file>        raw input
//! ```
//!
//! Elements are concatenated without separators. Content is never
//! re-encoded or line-ending normalized.

use std::path::Path;

use crate::domain::entities::CombinationSpec;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::value_objects::{ClassifiedPath, PathCategory};

use super::escaping::{escape_attr, wrap_cdata};
use super::path_classifier::PathClassifier;

/// Note attached to files read from the cleared directory
pub const CLEARED_NOTE: &str = "HTML comments were removed";

/// Render one embedded element for an already-read input
pub fn render_element(classified: &ClassifiedPath, content: &str) -> String {
    let path = escape_attr(&classified.display_path);
    match classified.category {
        PathCategory::Combined => format!(r#"<group path="{}">{}</group>"#, path, content),
        PathCategory::Cleared => format!(
            r#"<file path="{}" note="{}">{}</file>"#,
            path,
            CLEARED_NOTE,
            wrap_cdata(content)
        ),
        PathCategory::Raw => format!(r#"<file path="{}">{}</file>"#, path, wrap_cdata(content)),
    }
}

/// Render the document-level comment
fn render_comment(comment: &str) -> String {
    format!("<!--{}-->", comment)
}

/// Builds combined documents from combination specs
pub struct Bundler<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    root: &'a Path,
    classifier: &'a PathClassifier,
}

impl<'a, FS: FileSystem + ?Sized> Bundler<'a, FS> {
    /// Inputs are read from `root` joined with their configured path
    pub fn new(fs: &'a FS, root: &'a Path, classifier: &'a PathClassifier) -> Self {
        Self {
            fs,
            root,
            classifier,
        }
    }

    /// Build the full document text for `spec`.
    ///
    /// The first unreadable input aborts this combination.
    pub fn bundle(&self, spec: &CombinationSpec) -> FsResult<String> {
        let mut document = String::new();

        if let Some(comment) = spec.comment() {
            document.push_str(&render_comment(comment));
        }

        for input in spec.inputs() {
            let content = self.fs.read(&self.root.join(input))?;
            let classified = self.classifier.classify(input);
            tracing::debug!(
                input = %input,
                category = %classified.category,
                display = %classified.display_path,
                "embedding input"
            );
            document.push_str(&render_element(&classified, &content));
        }

        Ok(document)
    }
}
