//! Read-only commands over a loaded configuration.

use clap::Subcommand;

use super::print_json;
use crate::adapters::{LocalFilesystem, ProcessEnvironment};
use crate::app::Config;
use crate::app::configuration::DataDirArgs;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum InspectCommand {
    /// Print the resolved data directory
    DataDir,
    /// Print the application parameters
    #[clap(visible_alias = "p")]
    Parameters,
    /// Print the requested action
    Action,
    /// Print the authorization section
    Authorization,
    /// Print OAuth credentials
    Oauth {
        #[command(subcommand)]
        field: OauthField,
    },
    /// List input files (full paths)
    InputFiles,
    /// List declared input tables
    InputTables,
    /// List expected output files
    OutputFiles,
    /// List expected output tables
    OutputTables,
    /// Print the manifest of an input file
    FileManifest {
        /// File name or path under in/files/
        name: String,
    },
    /// Print the manifest of an input table
    TableManifest {
        /// Table file name, with or without .csv
        name: String,
    },
}

#[derive(Subcommand)]
pub enum OauthField {
    /// Decoded `#data` payload
    Data,
    /// Application key
    AppKey,
    /// Application secret
    AppSecret,
}

pub(super) fn run_inspect(data: Option<String>, command: InspectCommand) -> Result<(), AppError> {
    let args = DataDirArgs { data_dir: data };
    let config =
        Config::load_with(LocalFilesystem::new(), &ProcessEnvironment::new(), &args, None)?;

    match command {
        InspectCommand::DataDir => print_json(config.data_dir()),
        InspectCommand::Parameters => print_json(config.parameters()),
        InspectCommand::Action => print_json(config.action()),
        InspectCommand::Authorization => print_json(config.authorization()),
        InspectCommand::Oauth { field } => match field {
            OauthField::Data => print_json(&config.oauth_data()?),
            OauthField::AppKey => print_json(&config.oauth_app_key()),
            OauthField::AppSecret => print_json(&config.oauth_app_secret()),
        },
        InspectCommand::InputFiles => print_json(&config.input_files()?),
        InspectCommand::InputTables => print_json(&config.input_tables()),
        InspectCommand::OutputFiles => print_json(config.expected_output_files()),
        InspectCommand::OutputTables => print_json(&config.expected_output_tables()),
        InspectCommand::FileManifest { name } => print_json(&config.file_manifest(&name)?),
        InspectCommand::TableManifest { name } => print_json(&config.table_manifest(&name)?),
    }
}
