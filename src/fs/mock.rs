// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// In-memory filesystem where tests set modification times directly.
///
/// Clones share the same state, so a test can keep a handle and "touch"
/// files while a watch task polls another clone.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, SystemTime>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update a file with the given modification time.
    pub fn set_modified(&self, path: impl AsRef<Path>, mtime: SystemTime) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.as_ref().to_path_buf(), mtime);
    }

    /// Move a file's modification time by `delta` (forward or backward).
    pub fn shift(&self, path: impl AsRef<Path>, delta: Duration, backward: bool) {
        let mut files = self.files.lock().unwrap();
        if let Some(mtime) = files.get_mut(path.as_ref()) {
            *mtime = if backward { *mtime - delta } else { *mtime + delta };
        }
    }

    /// Delete a file; subsequent stats fail with `NotFound`.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        files.remove(path.as_ref());
    }
}

impl FileSystem for MockFileSystem {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        let files = self.files.lock().unwrap();
        files.get(path).copied().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File not found: {:?}", path))
        })
    }
}
