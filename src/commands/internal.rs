//! Implementation of the `bundle-params internal` command.

use super::{CommandContext, output};
use crate::bundle::Bundle;
use crate::cli::InternalArgs;
use crate::error::Result;
use crate::parameters::is_internal;
use serde::Serialize;

/// Classification result printed by the command.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub name: String,
    pub internal: bool,
}

/// Execute the `bundle-params internal` command.
pub fn cmd_internal(ctx: &CommandContext, args: InternalArgs) -> Result<()> {
    let classification = classify(&args)?;
    output::print(&classification, ctx.output)
}

fn classify(args: &InternalArgs) -> Result<Classification> {
    let bundle = Bundle::load(&args.bundle)?;
    let internal = is_internal(&args.name, &bundle);
    tracing::debug!(name = %args.name, internal, "classified parameter");

    Ok(Classification {
        name: args.name.clone(),
        internal,
    })
}
