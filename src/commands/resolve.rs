//! Implementation of the `bundle-params resolve` command.
//!
//! Parses user assignments and refuses any that target parameters the
//! bundle reserves for the tooling.

use super::{CommandContext, output};
use crate::bundle::Bundle;
use crate::cli::ResolveArgs;
use crate::error::{ParamsError, Result};
use crate::parameters::{AssignmentMap, internal_names, parse_assignments};

/// Execute the `bundle-params resolve` command.
pub fn cmd_resolve(ctx: &CommandContext, args: ResolveArgs) -> Result<()> {
    let bundle = Bundle::load(&args.bundle)?;
    let assignments = resolve_assignments(&args.assignments, &bundle)?;
    output::print(&assignments, ctx.output)
}

/// Parse assignments against a bundle, rejecting internal parameters.
pub fn resolve_assignments(tokens: &[String], bundle: &Bundle) -> Result<AssignmentMap> {
    let assignments = parse_assignments(tokens)?;

    let internal = internal_names(assignments.keys().map(String::as_str), bundle);
    if !internal.is_empty() {
        return Err(ParamsError::UserError(format!(
            "cannot set internal parameter(s): {}\n\n\
             These parameters are managed by the tooling and may not be assigned directly.",
            internal.join(", ")
        )));
    }

    Ok(assignments)
}
