use clap::{ArgAction, Parser};

/// Version reported by `--version`.
pub const VERSION: &str = "0.1.0";

/// Command-line arguments for the aws-knowledge-tool CLI.
///
/// Only the long `--help` and `--version` flags are recognised. Short forms,
/// other flags and positional arguments are usage errors.
#[derive(Debug, Parser)]
#[command(
    name = "aws-knowledge-tool",
    version = VERSION,
    about = "A CLI that queries the AWS knowledge base",
    long_about = None,
    disable_version_flag = true,
    disable_help_flag = true
)]
pub struct Args {
    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}
