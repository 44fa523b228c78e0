//! `DataFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{DataFilesystem, DirEntry};

use super::LocalFilesystem;

impl DataFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        debug!(path = %path.display(), "reading file");
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        debug!(path = %path.display(), bytes = content.len(), "writing file");
        fs::write(path, content).map_err(AppError::from)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        let entries = fs::read_dir(path).map_err(AppError::from)?;
        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            let entry_path = entry.path();
            // Follow symlinks the way a plain `is_file` check does.
            let is_file = entry_path.is_file();
            listed.push(DirEntry { path: entry_path, is_file });
        }
        Ok(listed)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
