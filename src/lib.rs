//! kbc-common: the common interface between a containerized data
//! application and the platform that runs it.
//!
//! The platform prepares a data directory holding `config.json` plus
//! `in/files/` and `in/tables/` with sidecar manifests. The application
//! reads its configuration through [`Config`], writes results to
//! `out/files/` and `out/tables/`, and describes them with manifests
//! written by [`ManifestWriter`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{LocalFilesystem, ProcessEnvironment};
pub use app::configuration::DataDirArgs;
pub use app::{Config, ManifestWriter};
pub use domain::{
    AppError, ConfigDocument, CsvDialect, DATA_DIR_ENV, DEFAULT_DATA_DIR, DeleteOperator,
    DeleteWhere, FileManifest, InputTable, InputTableManifest, KBC_CSV_DIALECT,
    LEGACY_DATA_DIR_ENV, MetadataEntry, OutputFile, OutputFileManifest, OutputTable,
    TableManifest, TableManifestBuilder,
};

/// Load the job configuration from the resolved data directory.
///
/// Equivalent to [`Config::load`]; `data_dir` may be empty to use the
/// command line, environment, or `/data/` fallback.
pub fn load_config(data_dir: &str) -> Result<Config, AppError> {
    Config::load(Some(data_dir))
}
