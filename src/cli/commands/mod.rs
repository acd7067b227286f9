//! CLI command implementations

mod baseline;
mod check;

use crate::cli::logging::LogLevel;
use crate::config::{Cli, Command};
use crate::error::Result;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Baseline(args) => baseline::run_baseline(&args, log_level),
        Command::Check(args) => check::run_check(&args, log_level),
    }
}
