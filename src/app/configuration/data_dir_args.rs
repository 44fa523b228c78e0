//! The `-d/--data` flag, read out of an argument list owned by someone else.
//!
//! The host process may receive flags meant for other components, so
//! anything that is not the data-directory flag is skipped instead of
//! being reported as an error.

use clap::Parser;

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct DataDirArgs {
    /// Data directory
    #[arg(short = 'd', long = "data", allow_hyphen_values = true)]
    pub data_dir: Option<String>,
}

impl DataDirArgs {
    pub fn new<S: Into<String>>(data_dir: S) -> Self {
        Self { data_dir: Some(data_dir.into()) }
    }

    /// Flag value from the current process arguments.
    pub fn from_env_args() -> Self {
        Self::from_args(std::env::args_os().skip(1).map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Flag value from `args` (without the program name). The last
    /// occurrence wins; everything after `--` is positional.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known = known_args(args);
        Self::try_parse_from(known).unwrap_or_default()
    }

    /// Flag value, empty when the flag was not given.
    pub fn as_str(&self) -> &str {
        self.data_dir.as_deref().unwrap_or_default()
    }
}

fn known_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut known = Vec::new();
    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        if arg == "-d" || arg == "--data" {
            if let Some(value) = args.next() {
                known = vec![arg, value];
            }
        } else if arg.starts_with("--data=") || (arg.starts_with("-d") && !arg.starts_with("--"))
        {
            known = vec![arg];
        }
    }
    known
}
