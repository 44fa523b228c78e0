pub mod document;
pub mod input_manifest;
pub mod loader;
pub mod storage;

pub use document::ConfigDocument;
pub use input_manifest::{FileManifest, InputTableManifest};
pub use loader::{load_document, parse_document};
pub use storage::{InputTable, OutputFile, OutputTable, Storage, StorageInput, StorageOutput};
