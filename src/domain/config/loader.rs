//! Reading `config.json` from a data directory.

use tracing::debug;

use crate::domain::AppError;
use crate::domain::config::ConfigDocument;
use crate::domain::data_dir::DataDir;
use crate::ports::DataFilesystem;

/// Read and parse `<data_dir>/config.json`.
///
/// Any failure, whether the file is missing, unreadable, or malformed, is
/// reported as `ConfigNotFound` carrying the directory.
pub fn load_document(
    fs: &impl DataFilesystem,
    data_dir: &DataDir,
) -> Result<ConfigDocument, AppError> {
    let path = data_dir.config_file();
    let not_found = || AppError::ConfigNotFound { data_dir: data_dir.as_str().to_string() };

    let content = fs.read_file(&path).map_err(|err| {
        debug!(path = %path.display(), error = %err, "config.json unreadable");
        not_found()
    })?;
    parse_document(&content).map_err(|err| {
        debug!(path = %path.display(), error = %err, "config.json malformed");
        not_found()
    })
}

/// Parse a configuration document from string content.
pub fn parse_document(content: &str) -> Result<ConfigDocument, AppError> {
    serde_json::from_str(content).map_err(|err| AppError::ParseError {
        what: "config.json".to_string(),
        details: err.to_string(),
    })
}
