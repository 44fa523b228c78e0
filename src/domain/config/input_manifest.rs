//! Sidecar manifests the platform writes next to input files and tables.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Manifest of a file in `in/files/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileManifest {
    #[serde(default)]
    pub id: u64,
    /// Original file name in storage.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Manifest of a table in `in/tables/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTableManifest {
    /// Platform-side table identifier.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
