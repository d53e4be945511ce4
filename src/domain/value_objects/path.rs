//! Safe Path Value Object
//!
//! A validated relative path used wherever a configured path is mirrored
//! under a stage directory or turned into an output file name:
//! - No path traversal (../)
//! - Not absolute, so it can never replace the stage directory
//! - `.` segments dropped, `\` accepted as a separator

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "Path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "Absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "Path is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A validated safe path
///
/// This value object ensures:
/// - Path is relative (no leading /)
/// - No traversal attacks (..)
/// - At least one normal segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Create a new SafePath after validation
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let path = Path::new(&raw);

        if path.is_absolute() || raw.starts_with('/') {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => normalized.push(segment),
                Component::CurDir => {}
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(normalized))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Mirror this path under `dir`
    pub fn under<P: AsRef<Path>>(&self, dir: P) -> PathBuf {
        dir.as_ref().join(&self.0)
    }

    /// Forward-slash rendering, independent of the host separator
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_slash_string())
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for SafePath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
