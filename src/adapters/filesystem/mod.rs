//! Local-disk adapter for the `DataFilesystem` port.

mod data_filesystem;

/// Filesystem store backed by `std::fs`.
///
/// Paths are used as given; the data directory layout is resolved by the
/// caller before any operation reaches this adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}
