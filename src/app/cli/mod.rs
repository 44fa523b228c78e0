//! CLI Adapter.

mod inspect;
mod write;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "kbc")]
#[command(version)]
#[command(
    about = "Inspect a job data directory and write output manifests",
    long_about = None
)]
struct Cli {
    /// Data directory (falls back to $KBC_DATADIR, $KBC_DATA_DIR, then /data/)
    #[arg(short = 'd', long = "data", global = true)]
    data: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Inspect(inspect::InspectCommand),
    /// Write the manifest for an output file
    WriteFileManifest {
        /// Output file the manifest describes
        path: PathBuf,
        /// File tag (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        /// Store the file as public
        #[arg(long)]
        public: bool,
        /// Store the file only temporarily
        #[arg(long)]
        temporary: bool,
        /// Notify project members about the upload
        #[arg(long)]
        notify: bool,
    },
    /// Write the manifest for an output table
    WriteTableManifest {
        /// Output CSV the manifest describes
        path: PathBuf,
        /// Destination table in storage
        #[arg(long)]
        destination: Option<String>,
        /// Primary key columns (comma separated or repeated)
        #[arg(long = "primary-key", value_delimiter = ',')]
        primary_key: Vec<String>,
        /// Columns of a headless CSV (comma separated or repeated)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
        /// Load incrementally
        #[arg(long)]
        incremental: bool,
        /// Full option set as a JSON object; flags override its values
        #[arg(long)]
        options: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::WriteFileManifest { path, tags, public, temporary, notify } => {
            write::run_write_file_manifest(path, tags, public, !temporary, notify)
        }
        Commands::WriteTableManifest {
            path,
            destination,
            primary_key,
            columns,
            incremental,
            options,
        } => write::run_write_table_manifest(
            path,
            write::TableFlags { destination, primary_key, columns, incremental, options },
        ),
        Commands::Inspect(command) => inspect::run_inspect(cli.data, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))?;
    println!("{}", text);
    Ok(())
}
