//! Implementation of the `bundle-params create` command.
//!
//! Stores `name=value` assignments as a named parameter set whose entries
//! are literal value sources.

use super::CommandContext;
use crate::cli::CreateArgs;
use crate::error::{ParamsError, Result};
use crate::parameters::{ParameterSet, ValueSource, parse_assignments};
use std::io;
use std::path::{Path, PathBuf};

/// Execute the `bundle-params create` command.
pub fn cmd_create(ctx: &CommandContext, args: CreateArgs) -> Result<()> {
    let (set, path) = create_set(ctx, &args)?;
    println!(
        "Created parameter set '{}' with {} parameter(s) at {}",
        set.name,
        set.parameters.len(),
        path.display()
    );
    Ok(())
}

/// Build and save the parameter set, returning it with its file path.
///
/// Without `--force` the set is written with a no-clobber create, so a set
/// that appears between the existence check and the write is kept.
pub fn create_set(ctx: &CommandContext, args: &CreateArgs) -> Result<(ParameterSet, PathBuf)> {
    let path = ctx.config.parameter_set_path(&args.name)?;
    if path.exists() && !args.force {
        return Err(already_exists(&args.name, &path));
    }

    let assignments = parse_assignments(&args.assignments)?;

    let mut set = ParameterSet::new(&args.name);
    for (name, value) in assignments {
        set.push(name, ValueSource::literal(value));
    }

    if args.force {
        set.save(&path)?;
    } else {
        set.save_new(&path).map_err(|e| match e {
            ParamsError::Storage { ref source, .. }
                if source.kind() == io::ErrorKind::AlreadyExists =>
            {
                already_exists(&args.name, &path)
            }
            other => other,
        })?;
    }

    Ok((set, path))
}

fn already_exists(name: &str, path: &Path) -> ParamsError {
    ParamsError::UserError(format!(
        "parameter set '{}' already exists at {}\n\n\
         Use --force to overwrite it.",
        name,
        path.display()
    ))
}
