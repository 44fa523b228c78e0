//! Manifest for a table in `out/tables/`.
//!
//! Every key is optional and written only when it carries something:
//! an empty destination, an empty key list, or `incremental = false` are
//! left out of the document rather than written as empty values.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::domain::manifest::metadata::entries_from_map;
use crate::domain::manifest::{ColumnMetadata, DeleteOperator, DeleteWhere, MetadataEntry};

/// A validated output table manifest, ready to be serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_key: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    incremental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Vec<MetadataEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_metadata: Option<ColumnMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_where_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_where_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delete_where_operator: Option<DeleteOperator>,
}

impl TableManifest {
    pub fn builder() -> TableManifestBuilder {
        TableManifestBuilder::new()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn is_incremental(&self) -> bool {
        self.incremental.unwrap_or(false)
    }
}

/// Collects table manifest options; [`TableManifestBuilder::build`]
/// validates them.
#[derive(Debug, Clone, Default)]
pub struct TableManifestBuilder {
    destination: String,
    primary_key: Vec<String>,
    columns: Vec<String>,
    incremental: bool,
    metadata: Vec<MetadataEntry>,
    column_metadata: ColumnMetadata,
    delete_where: Option<DeleteWhere>,
}

impl TableManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage table the CSV is loaded into, e.g. `out.c-main.results`.
    pub fn destination<S: Into<String>>(mut self, destination: S) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Column names for a CSV written without a header row.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn incremental(mut self, incremental: bool) -> Self {
        self.incremental = incremental;
        self
    }

    /// Table metadata, appended in the mapping's iteration order.
    pub fn metadata(mut self, metadata: &Map<String, Value>) -> Self {
        self.metadata.extend(entries_from_map(metadata));
        self
    }

    pub fn metadata_entry<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.metadata.push(MetadataEntry::new(key, value));
        self
    }

    pub fn column_metadata<C: Into<String>>(
        mut self,
        column: C,
        metadata: &Map<String, Value>,
    ) -> Self {
        self.column_metadata.insert(column, entries_from_map(metadata));
        self
    }

    pub fn delete_where(mut self, delete_where: DeleteWhere) -> Self {
        self.delete_where = Some(delete_where);
        self
    }

    /// Builder from a loosely typed JSON object using the writer's option
    /// names. Values that are empty or `false` count as not given.
    pub fn from_json(options: &Value) -> Result<Self, AppError> {
        let Some(options) = options.as_object() else {
            return Err(AppError::validation("Table manifest options must be a dict"));
        };

        let mut builder = Self::new();
        for (name, value) in options {
            if !is_truthy(value) {
                continue;
            }
            builder = match name.as_str() {
                "destination" => match value {
                    Value::String(destination) => builder.destination(destination.as_str()),
                    _ => return Err(AppError::validation("Destination must be a string")),
                },
                "primary_key" => builder.primary_key(string_list(value, "Primary key")?),
                "columns" => builder.columns(string_list(value, "Columns")?),
                "incremental" => builder.incremental(true),
                "metadata" => match value {
                    Value::Object(metadata) => builder.metadata(metadata),
                    _ => return Err(AppError::validation("Metadata must be a dict")),
                },
                "column_metadata" => {
                    let Value::Object(columns) = value else {
                        return Err(AppError::validation("Column metadata must be a dict"));
                    };
                    for (column, metadata) in columns {
                        let Value::Object(metadata) = metadata else {
                            return Err(AppError::validation(
                                "Column metadata must be a dict of dicts indexed by column name",
                            ));
                        };
                        builder = builder.column_metadata(column.as_str(), metadata);
                    }
                    builder
                }
                "delete_where" => builder.delete_where(DeleteWhere::from_json(value)?),
                other => {
                    return Err(AppError::validation(format!(
                        "Unknown table manifest option '{other}'"
                    )));
                }
            };
        }
        Ok(builder)
    }

    /// Validate the options and assemble the manifest.
    pub fn build(self) -> Result<TableManifest, AppError> {
        let mut manifest = TableManifest {
            destination: non_empty(self.destination, String::is_empty),
            primary_key: non_empty(self.primary_key, Vec::is_empty),
            columns: non_empty(self.columns, Vec::is_empty),
            incremental: self.incremental.then_some(true),
            metadata: non_empty(self.metadata, Vec::is_empty),
            column_metadata: non_empty(self.column_metadata, ColumnMetadata::is_empty),
            ..TableManifest::default()
        };

        if let Some(spec) = self.delete_where.filter(|spec| !spec.is_empty()) {
            let resolved = spec.validate()?;
            manifest.delete_where_values = Some(resolved.values);
            manifest.delete_where_column = Some(resolved.column);
            manifest.delete_where_operator = Some(resolved.operator);
        }
        Ok(manifest)
    }
}

fn non_empty<T>(value: T, is_empty: impl Fn(&T) -> bool) -> Option<T> {
    if is_empty(&value) { None } else { Some(value) }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn string_list(value: &Value, what: &str) -> Result<Vec<String>, AppError> {
    let Value::Array(items) = value else {
        return Err(AppError::validation(format!("{what} must be a list")));
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::validation(format!("{what} must be a list of strings")))
}
