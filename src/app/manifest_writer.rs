//! Writing `.manifest` sidecars next to output files and tables.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::adapters::LocalFilesystem;
use crate::domain::data_dir::manifest_path;
use crate::domain::{AppError, OutputFileManifest, TableManifestBuilder};
use crate::ports::DataFilesystem;

/// Serializes output manifests to `<path>.manifest`, replacing any
/// existing sidecar. Only the sidecar is written, never the data file.
#[derive(Debug, Clone)]
pub struct ManifestWriter<F: DataFilesystem = LocalFilesystem> {
    fs: F,
}

impl ManifestWriter<LocalFilesystem> {
    pub fn local() -> Self {
        Self::new(LocalFilesystem::new())
    }
}

impl<F: DataFilesystem> ManifestWriter<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Write the manifest for an output file. Returns the sidecar path.
    pub fn write_file_manifest<P: AsRef<Path>>(
        &self,
        file: P,
        manifest: &OutputFileManifest,
    ) -> Result<PathBuf, AppError> {
        self.write(file.as_ref(), manifest)
    }

    /// Validate and write the manifest for an output table. Nothing is
    /// written when validation fails. Returns the sidecar path.
    pub fn write_table_manifest<P: AsRef<Path>>(
        &self,
        file: P,
        manifest: TableManifestBuilder,
    ) -> Result<PathBuf, AppError> {
        let manifest = manifest.build()?;
        self.write(file.as_ref(), &manifest)
    }

    fn write<T: Serialize>(&self, file: &Path, document: &T) -> Result<PathBuf, AppError> {
        let target = manifest_path(file);
        let content = serde_json::to_string(document).map_err(|err| AppError::Io(err.into()))?;
        self.fs.write_file(&target, &content)?;
        info!(manifest = %target.display(), "manifest written");
        Ok(target)
    }
}
