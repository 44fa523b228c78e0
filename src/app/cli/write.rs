//! Manifest-writing commands. These do not need `config.json`.

use std::path::PathBuf;

use super::print_json;
use crate::app::ManifestWriter;
use crate::domain::{AppError, OutputFileManifest, TableManifestBuilder};

pub(super) struct TableFlags {
    pub destination: Option<String>,
    pub primary_key: Vec<String>,
    pub columns: Vec<String>,
    pub incremental: bool,
    pub options: Option<String>,
}

pub(super) fn run_write_file_manifest(
    path: PathBuf,
    tags: Vec<String>,
    is_public: bool,
    is_permanent: bool,
    notify: bool,
) -> Result<(), AppError> {
    let manifest = OutputFileManifest::new()
        .with_tags(tags)
        .public(is_public)
        .permanent(is_permanent)
        .notify(notify);
    let written = ManifestWriter::local().write_file_manifest(&path, &manifest)?;
    print_json(&written)
}

pub(super) fn run_write_table_manifest(path: PathBuf, flags: TableFlags) -> Result<(), AppError> {
    let mut builder = match flags.options.as_deref() {
        Some(text) => {
            let options: serde_json::Value = serde_json::from_str(text)
                .map_err(|err| AppError::validation(format!("Invalid --options JSON: {err}")))?;
            TableManifestBuilder::from_json(&options)?
        }
        None => TableManifestBuilder::new(),
    };
    if let Some(destination) = flags.destination {
        builder = builder.destination(destination);
    }
    if !flags.primary_key.is_empty() {
        builder = builder.primary_key(flags.primary_key);
    }
    if !flags.columns.is_empty() {
        builder = builder.columns(flags.columns);
    }
    if flags.incremental {
        builder = builder.incremental(true);
    }

    let written = ManifestWriter::local().write_table_manifest(&path, builder)?;
    print_json(&written)
}
