//! Data directory resolution.

use tracing::debug;

use crate::app::configuration::DataDirArgs;
use crate::domain::data_dir::{DATA_DIR_ENV, DEFAULT_DATA_DIR, LEGACY_DATA_DIR_ENV};
use crate::ports::Environment;

/// Pick the data directory; the first non-empty source wins: the explicit
/// argument, the `-d/--data` flag, `KBC_DATADIR`, `KBC_DATA_DIR`, then
/// `/data/`.
pub fn resolve_data_dir(
    explicit: Option<&str>,
    args: &DataDirArgs,
    env: &(impl Environment + ?Sized),
) -> String {
    if let Some(dir) = explicit.filter(|dir| !dir.is_empty()) {
        debug!(data_dir = dir, "using explicit data directory");
        return dir.to_string();
    }
    if !args.as_str().is_empty() {
        debug!(data_dir = args.as_str(), "using data directory from command line");
        return args.as_str().to_string();
    }
    for name in [DATA_DIR_ENV, LEGACY_DATA_DIR_ENV] {
        if let Some(dir) = env.var(name).filter(|dir| !dir.is_empty()) {
            debug!(data_dir = %dir, variable = name, "using data directory from environment");
            return dir;
        }
    }
    debug!(data_dir = DEFAULT_DATA_DIR, "using default data directory");
    DEFAULT_DATA_DIR.to_string()
}
