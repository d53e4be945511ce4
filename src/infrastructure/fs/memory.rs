//! In-memory file system for tests
//!
//! Counts writes and can be told to deny access to paths, which is how
//! cleanup and encoding failures are exercised without touching disk.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    denied: Mutex<BTreeSet<PathBuf>>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a text file (not counted as a write)
    pub fn insert(&self, path: impl AsRef<Path>, content: &str) {
        self.insert_bytes(path, content.as_bytes().to_vec());
    }

    /// Seed raw bytes, e.g. invalid UTF-8
    pub fn insert_bytes(&self, path: impl AsRef<Path>, content: Vec<u8>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), content);
    }

    /// Every operation on `path` (or below it) fails with PermissionDenied
    pub fn deny(&self, path: impl AsRef<Path>) {
        self.denied
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Text content of a file, if present
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Paths written through the port, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    fn check_access(&self, path: &Path) -> FsResult<()> {
        let denied = self.denied.lock().unwrap();
        if denied.iter().any(|d| path.starts_with(d)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.check_access(path)?;
        let files = self.files.lock().unwrap();
        let bytes = files
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone()).map_err(|_| FsError::InvalidEncoding(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.check_access(path)?;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        self.writes.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check_access(path)?;
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.check_access(path)?;
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check_access(path)?;
        let mut files = self.files.lock().unwrap();
        let mut dirs = self.dirs.lock().unwrap();

        let before = files.len() + dirs.len();
        files.retain(|p, _| !p.starts_with(path));
        dirs.retain(|p| !p.starts_with(path));

        if files.len() + dirs.len() == before {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }
}
