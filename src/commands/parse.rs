//! Implementation of the `bundle-params parse` command.

use super::{CommandContext, output};
use crate::cli::ParseArgs;
use crate::error::Result;
use crate::parameters::parse_assignments;

/// Execute the `bundle-params parse` command.
pub fn cmd_parse(ctx: &CommandContext, args: ParseArgs) -> Result<()> {
    let assignments = parse_assignments(&args.assignments)?;
    output::print(&assignments, ctx.output)
}
