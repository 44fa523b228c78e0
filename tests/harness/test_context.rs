//! Shared testing harness for `kbc-common` integration tests.

use assert_cmd::Command;
use kbc_common::{Config, DataDirArgs, LocalFilesystem, ProcessEnvironment};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::{CONFIG, INPUT_FILES, SAMPLE_COLUMNS};

/// Isolated data directories: `data/` is fully populated, `data2/`
/// holds a config without storage, parameters, or action.
pub(crate) struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
    empty_data_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        let empty_data_dir = root.path().join("data2");

        write(&data_dir.join("config.json"), CONFIG);
        for (name, manifest) in INPUT_FILES {
            write(&data_dir.join("in/files").join(name), "GIF89a");
            write(&data_dir.join("in/files").join(format!("{name}.manifest")), manifest);
        }
        write(&data_dir.join("in/files/.DS_Store"), "");
        fs::create_dir_all(data_dir.join("in/files/subdir")).expect("Failed to create subdir");

        let header = SAMPLE_COLUMNS.iter().map(|c| format!("\"{c}\"")).collect::<Vec<_>>();
        write(&data_dir.join("in/tables/sample.csv"), &format!("{}\n", header.join(",")));
        write(
            &data_dir.join("in/tables/sample.csv.manifest"),
            &serde_json::json!({ "id": "in.c-main.test", "columns": SAMPLE_COLUMNS }).to_string(),
        );
        write(&data_dir.join("in/tables/fooBar.csv"), "\"id\",\"bar\"\n\"1\",\"x\"\n");
        write(
            &data_dir.join("in/tables/fooBar.csv.manifest"),
            r#"{"id": "in.c-main.test2", "columns": ["id", "bar"]}"#,
        );
        fs::create_dir_all(data_dir.join("out/files")).expect("Failed to create out/files");
        fs::create_dir_all(data_dir.join("out/tables")).expect("Failed to create out/tables");

        write(&empty_data_dir.join("config.json"), r#"{"image_parameters": {}}"#);
        fs::create_dir_all(empty_data_dir.join("in/files")).expect("Failed to create in/files");

        Self { root, data_dir, empty_data_dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn empty_data_dir(&self) -> &Path {
        &self.empty_data_dir
    }

    /// Data directory as the string `Config` reports back.
    pub(crate) fn data_dir_str(&self) -> String {
        self.data_dir.to_str().expect("temp path is UTF-8").to_string()
    }

    /// Load the populated data directory with an explicit path.
    pub(crate) fn config(&self) -> Config {
        self.config_at(&self.data_dir)
    }

    pub(crate) fn config_at(&self, dir: &Path) -> Config {
        Config::load_with(
            LocalFilesystem::new(),
            &ProcessEnvironment::new(),
            &DataDirArgs::default(),
            dir.to_str(),
        )
        .expect("Failed to load test config")
    }

    /// Build a command for invoking the compiled `kbc` binary with the
    /// data-directory variables cleared.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kbc").expect("Failed to locate kbc binary");
        cmd.current_dir(self.root.path())
            .env_remove("KBC_DATADIR")
            .env_remove("KBC_DATA_DIR");
        cmd
    }

    /// Parse a manifest written next to `file`.
    pub(crate) fn read_manifest(&self, file: &Path) -> serde_json::Value {
        let path = PathBuf::from(format!("{}.manifest", file.display()));
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
        serde_json::from_str(&content).expect("Manifest is not valid JSON")
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}
