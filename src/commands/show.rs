//! Implementation of the `bundle-params show` command.

use super::{CommandContext, output};
use crate::cli::{SetTarget, ShowArgs};
use crate::error::{ParamsError, Result};
use crate::parameters::ParameterSet;
use std::path::PathBuf;

/// Execute the `bundle-params show` command.
pub fn cmd_show(ctx: &CommandContext, args: ShowArgs) -> Result<()> {
    let set = load_target(ctx, &args.target)?;
    output::print(&set, ctx.output)
}

/// Load the parameter set a target points at.
pub fn load_target(ctx: &CommandContext, target: &SetTarget) -> Result<ParameterSet> {
    ParameterSet::load(target_path(ctx, target)?)
}

fn target_path(ctx: &CommandContext, target: &SetTarget) -> Result<PathBuf> {
    match (&target.path, &target.name) {
        (Some(path), _) => Ok(path.clone()),
        (None, Some(name)) => ctx.config.parameter_set_path(name),
        (None, None) => Err(ParamsError::UserError(
            "either a parameter set path or --name is required".to_string(),
        )),
    }
}
