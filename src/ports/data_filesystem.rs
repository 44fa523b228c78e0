//! Data-directory filesystem operations.
//!
//! This port is the only way the library touches the disk. It does not
//! own the `in/` and `out/` layout; that belongs to `domain::data_dir`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A single entry returned by [`DataFilesystem::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the entry (directory joined with the entry name).
    pub path: PathBuf,
    /// True when the entry is a regular file.
    pub is_file: bool,
}

impl DirEntry {
    /// Final path component as UTF-8, or empty when it is not representable.
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|name| name.to_str()).unwrap_or_default()
    }
}

/// Port for reading config and manifests and writing manifest sidecars.
pub trait DataFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// List entries of a directory. Order is unspecified.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Check whether a directory exists.
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: DataFilesystem + ?Sized> DataFilesystem for &T {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        (**self).write_file(path, content)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        (**self).list_dir(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
