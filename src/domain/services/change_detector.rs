//! Change detection for stage outputs
//!
//! A stage output is written only when the file on disk is missing or its
//! decoded text differs. Re-running the pipeline on unchanged inputs
//! therefore performs no writes at all.

use std::path::Path;

use crate::domain::ports::{FileSystem, FsError, FsResult};

/// Decide whether `new_content` has to be written to `path`.
///
/// Returns `Ok(true)` if nothing exists at `path` or the existing text
/// differs. An existing file that cannot be read or is not valid UTF-8 is an
/// error, never a silent "needs write".
pub fn needs_write<FS>(fs: &FS, path: &Path, new_content: &str) -> FsResult<bool>
where
    FS: FileSystem + ?Sized,
{
    match fs.read(path) {
        Ok(existing) => Ok(existing != new_content),
        Err(FsError::NotFound(_)) => Ok(true),
        Err(err) => Err(err),
    }
}
