//! bundle-params: reconcile user-supplied runtime parameters with a bundle.
//!
//! This is the main entry point for the `bundle-params` CLI. It parses
//! arguments, sets up logging, dispatches to the appropriate command
//! handler, and maps errors to exit codes.

mod cli;
mod commands;
pub mod bundle;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod parameters;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_cli_logger(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
