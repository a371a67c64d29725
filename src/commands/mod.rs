//! Command implementations for bundle-params.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command keeps its logic in a function that returns
//! data, and prints through [`output::render`].

mod create;
mod internal;
mod output;
mod parse;
mod resolve;
mod show;

use crate::cli::{Cli, Command};
use crate::config::{Config, OutputFormat};
use crate::error::{ParamsError, Result};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub output: OutputFormat,
}

impl CommandContext {
    /// Build the context from global CLI flags and the working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ParamsError::storage(".", e))?;
        let config = Config::resolve(cli.config.as_deref(), &cwd)?;
        let output = cli.output.unwrap_or(config.output);
        Ok(Self { config, output })
    }
}

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(&cli)?;

    match cli.command {
        Command::Parse(args) => parse::cmd_parse(&ctx, args),
        Command::Show(args) => show::cmd_show(&ctx, args),
        Command::Create(args) => create::cmd_create(&ctx, args),
        Command::Internal(args) => internal::cmd_internal(&ctx, args),
        Command::Resolve(args) => resolve::cmd_resolve(&ctx, args),
    }
}
