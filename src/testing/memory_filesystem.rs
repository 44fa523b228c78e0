use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{DataFilesystem, DirEntry};

/// In-memory filesystem. Directories exist implicitly above every file
/// and can also be added empty.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.dirs.borrow_mut().insert(PathBuf::from(path));
        self
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    fn not_found(path: &Path) -> AppError {
        AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

impl DataFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.borrow().get(path).cloned().ok_or_else(|| Self::not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        if !self.is_dir(path) {
            return Err(Self::not_found(path));
        }
        let mut entries: BTreeMap<PathBuf, bool> = BTreeMap::new();
        for file in self.files.borrow().keys() {
            if let Ok(rest) = file.strip_prefix(path)
                && let Some(first) = rest.components().next()
            {
                let child = path.join(first);
                let is_file = child == *file;
                entries.entry(child).and_modify(|flag| *flag |= is_file).or_insert(is_file);
            }
        }
        for dir in self.dirs.borrow().iter() {
            if dir.parent() == Some(path) {
                entries.entry(dir.clone()).or_insert(false);
            }
        }
        Ok(entries.into_iter().map(|(path, is_file)| DirEntry { path, is_file }).collect())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
            || self.files.borrow().keys().any(|file| file != path && file.starts_with(path))
    }
}
