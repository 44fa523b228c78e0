//! Read-only access to a loaded `config.json` and the input data around it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::adapters::{LocalFilesystem, ProcessEnvironment};
use crate::app::ManifestWriter;
use crate::app::configuration::{DataDirArgs, resolve_data_dir};
use crate::domain::config::load_document;
use crate::domain::data_dir::{MANIFEST_SUFFIX, manifest_path, normalize_path};
use crate::domain::{
    AppError, ConfigDocument, CsvDialect, DataDir, FileManifest, InputTable, InputTableManifest,
    KBC_CSV_DIALECT, OutputFile, OutputFileManifest, OutputTable, TableManifestBuilder,
};
use crate::ports::{DataFilesystem, Environment};

/// A loaded job configuration bound to its data directory.
///
/// The document is never modified after load; descriptors that need a
/// resolved `full_path` are returned as enriched copies.
#[derive(Debug)]
pub struct Config<F: DataFilesystem = LocalFilesystem> {
    fs: F,
    data_dir: DataDir,
    document: ConfigDocument,
}

impl Config<LocalFilesystem> {
    /// Load `config.json` from the local disk.
    ///
    /// An empty or missing `data_dir` falls back to the `-d/--data` process
    /// argument, then `KBC_DATADIR`, `KBC_DATA_DIR`, and `/data/`.
    pub fn load(data_dir: Option<&str>) -> Result<Self, AppError> {
        Self::load_with(
            LocalFilesystem::new(),
            &ProcessEnvironment::new(),
            &DataDirArgs::from_env_args(),
            data_dir,
        )
    }
}

impl<F: DataFilesystem> Config<F> {
    /// Load with explicit host capabilities.
    pub fn load_with(
        fs: F,
        env: &impl Environment,
        args: &DataDirArgs,
        data_dir: Option<&str>,
    ) -> Result<Self, AppError> {
        let data_dir = DataDir::new(resolve_data_dir(data_dir, args, env));
        let document = load_document(&fs, &data_dir)?;
        debug!(data_dir = data_dir.as_str(), "configuration loaded");
        Ok(Self { fs, data_dir, document })
    }

    /// Wrap an already parsed document.
    pub fn from_document(fs: F, data_dir: DataDir, document: ConfigDocument) -> Self {
        Self { fs, data_dir, document }
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Data directory exactly as resolved.
    pub fn data_dir(&self) -> &str {
        self.data_dir.as_str()
    }

    pub fn in_files_dir(&self) -> PathBuf {
        self.data_dir.in_files()
    }

    pub fn in_tables_dir(&self) -> PathBuf {
        self.data_dir.in_tables()
    }

    pub fn out_files_dir(&self) -> PathBuf {
        self.data_dir.out_files()
    }

    pub fn out_tables_dir(&self) -> PathBuf {
        self.data_dir.out_tables()
    }

    /// Dialect for reading input tables and writing output tables.
    pub fn csv_dialect(&self) -> &'static CsvDialect {
        &KBC_CSV_DIALECT
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.document.parameters
    }

    pub fn action(&self) -> &str {
        self.document.action.as_deref().unwrap_or_default()
    }

    pub fn authorization(&self) -> &Map<String, Value> {
        &self.document.authorization
    }

    pub fn oauth_data(&self) -> Result<Map<String, Value>, AppError> {
        self.document.oauth_data()
    }

    pub fn oauth_app_secret(&self) -> String {
        self.document.oauth_app_secret()
    }

    pub fn oauth_app_key(&self) -> String {
        self.document.oauth_app_key()
    }

    /// Regular files in `in/files/`, sidecar manifests and hidden files
    /// excluded, sorted by path. A missing directory has no files.
    pub fn input_files(&self) -> Result<Vec<PathBuf>, AppError> {
        let dir = self.in_files_dir();
        if !self.fs.is_dir(&dir) {
            debug!(dir = %dir.display(), "input files directory absent");
            return Ok(Vec::new());
        }
        let mut files: Vec<PathBuf> = self
            .fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| {
                let name = entry.file_name();
                entry.is_file && !name.ends_with(MANIFEST_SUFFIX) && !name.starts_with('.')
            })
            .map(|entry| entry.path)
            .collect();
        files.sort();
        Ok(files)
    }

    /// Manifest of an input file, given either its bare name or its path.
    pub fn file_manifest<P: AsRef<Path>>(&self, file: P) -> Result<FileManifest, AppError> {
        let path = self.resolve_input_file(file.as_ref());
        self.read_manifest(&manifest_path(&path), "file manifest")
    }

    /// Declared input tables with `full_path` resolved under `in/tables/`.
    pub fn input_tables(&self) -> Vec<InputTable> {
        self.document.storage.input.tables.iter().map(|t| t.resolved(&self.data_dir)).collect()
    }

    /// Manifest of an input table. `sample` and `sample.csv` name the same table.
    pub fn table_manifest(&self, table: &str) -> Result<InputTableManifest, AppError> {
        let file_name =
            if table.ends_with(".csv") { table.to_string() } else { format!("{table}.csv") };
        let path = self.in_tables_dir().join(file_name);
        self.read_manifest(&manifest_path(&path), "table manifest")
    }

    pub fn expected_output_files(&self) -> &[OutputFile] {
        &self.document.storage.output.files
    }

    /// Expected output tables with `full_path` under `out/tables/`.
    pub fn expected_output_tables(&self) -> Vec<OutputTable> {
        self.document.storage.output.tables.iter().map(|t| t.resolved(&self.data_dir)).collect()
    }

    /// Writer for output manifests sharing this configuration's filesystem.
    pub fn manifest_writer(&self) -> ManifestWriter<&F> {
        ManifestWriter::new(&self.fs)
    }

    pub fn write_file_manifest<P: AsRef<Path>>(
        &self,
        file: P,
        manifest: &OutputFileManifest,
    ) -> Result<PathBuf, AppError> {
        self.manifest_writer().write_file_manifest(file, manifest)
    }

    pub fn write_table_manifest<P: AsRef<Path>>(
        &self,
        file: P,
        manifest: TableManifestBuilder,
    ) -> Result<PathBuf, AppError> {
        self.manifest_writer().write_table_manifest(file, manifest)
    }

    /// Anchor a file name under `in/files/` unless it already lies there.
    /// Containment is checked per path component, so `in/files2` is not
    /// inside `in/files`.
    fn resolve_input_file(&self, file: &Path) -> PathBuf {
        let file = normalize_path(file);
        let base = normalize_path(&self.in_files_dir());
        if file.starts_with(&base) { file } else { base.join(file) }
    }

    fn read_manifest<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T, AppError> {
        if !self.fs.file_exists(path) {
            return Err(AppError::ManifestNotFound { path: path.to_path_buf() });
        }
        let content = self.fs.read_file(path)?;
        serde_json::from_str(&content).map_err(|err| AppError::ParseError {
            what: format!("{what} {}", path.display()),
            details: err.to_string(),
        })
    }
}
