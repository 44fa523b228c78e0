//! Manifests written for output files and tables.

pub mod delete_where;
pub mod file_manifest;
pub mod metadata;
pub mod table_manifest;

pub use delete_where::{DeleteOperator, DeleteWhere};
pub use file_manifest::OutputFileManifest;
pub use metadata::{ColumnMetadata, MetadataEntry};
pub use table_manifest::{TableManifest, TableManifestBuilder};
