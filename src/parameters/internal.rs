//! Classification of tool-managed ("internal") parameters.

use crate::bundle::Bundle;

/// Definition comment that marks a parameter as internal to the tooling.
///
/// Bundle authors hide a parameter from direct user assignment by setting
/// its definition's `$comment` to exactly this value.
pub const PORTER_INTERNAL: &str = "porter-internal";

/// Determine whether `name` is an internal parameter of `bundle`.
///
/// Both hops (parameter -> definition name -> definition) must resolve for a
/// positive result; a miss at either hop means "not internal".
pub fn is_internal(name: &str, bundle: &Bundle) -> bool {
    bundle
        .definition_for(name)
        .is_some_and(|definition| definition.comment.as_deref() == Some(PORTER_INTERNAL))
}

/// Names from `names` that `bundle` marks as internal, in input order.
pub fn internal_names<'a, I>(names: I, bundle: &Bundle) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| is_internal(name, bundle))
        .collect()
}
