//! Data directory layout and path helpers.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Primary environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "KBC_DATADIR";

/// Legacy name of [`DATA_DIR_ENV`], consulted only when the primary is empty.
pub const LEGACY_DATA_DIR_ENV: &str = "KBC_DATA_DIR";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "/data/";

pub const CONFIG_FILE: &str = "config.json";

pub const MANIFEST_SUFFIX: &str = ".manifest";

/// Paths under a resolved data directory.
///
/// The directory string is kept exactly as resolved (trailing slash
/// included) so callers get back what they configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    raw: String,
}

impl DataDir {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.raw)
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join(CONFIG_FILE)
    }

    pub fn in_files(&self) -> PathBuf {
        self.path().join("in").join("files")
    }

    pub fn in_tables(&self) -> PathBuf {
        self.path().join("in").join("tables")
    }

    pub fn out_files(&self) -> PathBuf {
        self.path().join("out").join("files")
    }

    pub fn out_tables(&self) -> PathBuf {
        self.path().join("out").join("tables")
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into
/// its parent. Symlinks are not resolved and the filesystem is not touched.
///
/// `..` directly under the root stays at the root; leading `..` on a
/// relative path is preserved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
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
    if parts.is_empty() { PathBuf::from(".") } else { parts.iter().collect() }
}

/// Sidecar manifest path for a data file: `<path>.manifest`.
pub fn manifest_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(MANIFEST_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_at_raw_directory() {
        let dir = DataDir::new("/data/");
        assert_eq!(dir.as_str(), "/data/");
        assert_eq!(dir.config_file(), PathBuf::from("/data/config.json"));
        assert_eq!(dir.in_files(), PathBuf::from("/data/in/files"));
        assert_eq!(dir.in_tables(), PathBuf::from("/data/in/tables"));
        assert_eq!(dir.out_files(), PathBuf::from("/data/out/files"));
        assert_eq!(dir.out_tables(), PathBuf::from("/data/out/tables"));
    }

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/data/./in//files/")),
            PathBuf::from("/data/in/files")
        );
        assert_eq!(normalize_path(Path::new("/data/x/../in")), PathBuf::from("/data/in"));
        assert_eq!(normalize_path(Path::new("/../data")), PathBuf::from("/data"));
        assert_eq!(normalize_path(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn manifest_path_appends_suffix() {
        assert_eq!(
            manifest_path(Path::new("/data/out/tables/t.csv")),
            PathBuf::from("/data/out/tables/t.csv.manifest")
        );
    }
}
