//! Path classification
//!
//! Maps a configured input path to the stage that produced it and to the
//! path shown for it inside a combined document. Containment is checked
//! segment by segment after lexical normalization, so `cleared-extra/a.md`
//! is never inside `cleared/`.

use std::path::{Component, Path, PathBuf};

use crate::domain::value_objects::{ClassifiedPath, PathCategory};

/// Lexically normalize a path: `\` and `/` both separate, `.` segments are
/// dropped and `..` cancels the preceding normal segment.
///
/// The file system is never consulted.
pub fn normalize_lexically(path: &str) -> PathBuf {
    let unified = path.replace('\\', "/");
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in Path::new(&unified).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Whether `path` lies inside `dir` (both already normalized).
///
/// An empty `dir` contains nothing.
fn is_within(path: &Path, dir: &Path) -> bool {
    !dir.as_os_str().is_empty() && path.starts_with(dir)
}

/// Join the segments of `rel` with `/`, prefixed by a leading `/`
fn to_display_path(rel: &Path) -> String {
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}

/// Classifies paths against the two stage directories
#[derive(Debug, Clone)]
pub struct PathClassifier {
    cleared_dir: PathBuf,
    combined_dir: PathBuf,
}

impl PathClassifier {
    pub fn new(cleared_dir: &str, combined_dir: &str) -> Self {
        Self {
            cleared_dir: normalize_lexically(cleared_dir),
            combined_dir: normalize_lexically(combined_dir),
        }
    }

    /// Classify `path` and derive its display path.
    ///
    /// 1. inside the combined directory: `Combined`, path unchanged
    /// 2. inside the cleared directory: `Cleared`, path relative to that
    ///    directory with `/` separators and a leading `/`
    /// 3. otherwise: `Raw`, path unchanged
    pub fn classify(&self, path: &str) -> ClassifiedPath {
        let normalized = normalize_lexically(path);

        if is_within(&normalized, &self.combined_dir) {
            return ClassifiedPath::new(PathCategory::Combined, path);
        }

        if is_within(&normalized, &self.cleared_dir) {
            if let Ok(rel) = normalized.strip_prefix(&self.cleared_dir) {
                return ClassifiedPath::new(PathCategory::Cleared, to_display_path(rel));
            }
        }

        ClassifiedPath::new(PathCategory::Raw, path)
    }
}

/// One-shot classification without building a `PathClassifier`
pub fn classify(path: &str, cleared_dir: &str, combined_dir: &str) -> ClassifiedPath {
    PathClassifier::new(cleared_dir, combined_dir).classify(path)
}
