pub mod config;
pub mod csv_dialect;
pub mod data_dir;
pub mod error;
pub mod manifest;

pub use config::{
    ConfigDocument, FileManifest, InputTable, InputTableManifest, OutputFile, OutputTable,
    Storage,
};
pub use csv_dialect::{CsvDialect, KBC_CSV_DIALECT};
pub use data_dir::{DATA_DIR_ENV, DEFAULT_DATA_DIR, DataDir, LEGACY_DATA_DIR_ENV};
pub use error::AppError;
pub use manifest::{
    DeleteOperator, DeleteWhere, MetadataEntry, OutputFileManifest, TableManifest,
    TableManifestBuilder,
};
