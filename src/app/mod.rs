pub mod cli;
mod config;
pub mod configuration;
mod manifest_writer;

pub use config::Config;
pub use manifest_writer::ManifestWriter;
