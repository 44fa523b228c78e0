mod data_filesystem;
mod environment;

pub use data_filesystem::{DataFilesystem, DirEntry};
pub use environment::Environment;
