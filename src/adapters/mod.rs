mod filesystem;
mod process_environment;

pub use filesystem::LocalFilesystem;
pub use process_environment::ProcessEnvironment;
