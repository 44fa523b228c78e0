pub mod data_dir_args;
pub mod data_dir_resolver;

pub use data_dir_args::DataDirArgs;
pub use data_dir_resolver::resolve_data_dir;
