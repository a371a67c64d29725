//! Parameter handling for bundle deployments.
//!
//! Three independent pieces, composed by callers:
//!
//! - [`parse_assignments`]: `name=value` tokens into an [`AssignmentMap`]
//! - [`ParameterSet::load`]: a persisted parameter set from YAML
//! - [`is_internal`]: whether a bundle reserves a parameter for the tooling

mod assignment;
mod internal;
mod set;


pub use assignment::{Assignment, AssignmentMap, parse_assignments};
pub use internal::{PORTER_INTERNAL, internal_names, is_internal};
pub use set::{ParameterSet, ParameterStrategy, ValueSource};
