// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

pub mod mock;

/// Abstract filesystem interface.
///
/// The watch loop only ever needs one piece of metadata: the last
/// modification time of a path.
pub trait FileSystem: Send + Sync + Debug {
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }
}
