//! CombinationSpec entity - one named bundle of input files

/// A named, ordered list of inputs bundled into one combined document
///
/// Input order is embedding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpec {
    name: String,
    inputs: Vec<String>,
    comment: Option<String>,
}

impl CombinationSpec {
    pub fn new(name: impl Into<String>, inputs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            inputs,
            comment: None,
        }
    }

    /// Attach a document-level comment
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment.filter(|c| !c.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Output file name for this combination, e.g. `docs.xml`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.name, extension)
    }
}
