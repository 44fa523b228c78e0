//! `storage` section: declared input tables and expected outputs.

use std::path::PathBuf;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::data_dir::{DataDir, normalize_path};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, deserialize_with = "object_or_default")]
    pub input: StorageInput,
    #[serde(default, deserialize_with = "object_or_default")]
    pub output: StorageOutput,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageInput {
    #[serde(default)]
    pub tables: Vec<InputTable>,
    /// Input file mappings. The files themselves are discovered on disk.
    #[serde(default)]
    pub files: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageOutput {
    #[serde(default)]
    pub tables: Vec<OutputTable>,
    #[serde(default)]
    pub files: Vec<OutputFile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads an empty section written as `[]` (or any non-object) as the default.
pub(crate) fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => T::deserialize(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

/// Storage table downloaded into `in/tables/<destination>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTable {
    /// Platform-side table identifier, e.g. `in.c-main.test`.
    #[serde(default)]
    pub source: String,
    /// Local CSV file name.
    #[serde(default)]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InputTable {
    /// Copy of this descriptor with `full_path` set to the normalized
    /// location under `in/tables/`.
    pub fn resolved(&self, data_dir: &DataDir) -> Self {
        let full_path = normalize_path(&data_dir.in_tables().join(&self.destination));
        Self { full_path: Some(full_path), ..self.clone() }
    }
}

/// Table the application is expected to produce in `out/tables/<source>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputTable {
    /// Local CSV file name the application writes.
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutputTable {
    /// Copy of this descriptor with `full_path` under `out/tables/`.
    /// The path is joined, not normalized.
    pub fn resolved(&self, data_dir: &DataDir) -> Self {
        let full_path = data_dir.out_tables().join(&self.source);
        Self { full_path: Some(full_path), ..self.clone() }
    }

    /// Platform-side destination table, when declared.
    pub fn destination(&self) -> Option<&str> {
        self.extra.get("destination").and_then(Value::as_str)
    }
}

/// File the application is expected to produce in `out/files/<source>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputFile {
    #[serde(default)]
    pub source: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
