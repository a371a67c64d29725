//! CLI argument parsing for bundle-params.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// bundle-params: reconcile user-supplied parameters with a bundle.
///
/// Parses `name=value` assignments, manages named parameter sets, and
/// reports which bundle parameters are reserved for the tooling.
#[derive(Parser, Debug)]
#[command(name = "bundle-params")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: .bundle-params/config.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for results (overrides config).
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for bundle-params.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse name=value assignments and print the resulting map.
    ///
    /// Later assignments to the same name win.
    Parse(ParseArgs),

    /// Show a parameter set, by file path or by name.
    Show(ShowArgs),

    /// Create a named parameter set from name=value assignments.
    ///
    /// Each assignment is stored as a literal value source.
    Create(CreateArgs),

    /// Report whether a bundle parameter is internal to the tooling.
    Internal(InternalArgs),

    /// Parse assignments and reject any that target internal parameters.
    Resolve(ResolveArgs),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Assignments in name=value form.
    #[arg(required = true)]
    pub assignments: Vec<String>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: SetTarget,
}

/// Exactly one way of locating a parameter set.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SetTarget {
    /// Path to a parameter set file.
    pub path: Option<PathBuf>,

    /// Name of a parameter set in the configured directory.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `create` command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the new parameter set.
    pub name: String,

    /// Assignments in name=value form.
    pub assignments: Vec<String>,

    /// Overwrite an existing set with the same name.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `internal` command.
#[derive(Parser, Debug)]
pub struct InternalArgs {
    /// Parameter name to classify.
    pub name: String,

    /// Path to the bundle.json.
    #[arg(long)]
    pub bundle: PathBuf,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Path to the bundle.json.
    #[arg(long)]
    pub bundle: PathBuf,

    /// Assignments in name=value form.
    pub assignments: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
