//! Parsing of `name=value` parameter assignments from the command line.

use crate::error::{ParamsError, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Resolved assignments, one value per parameter name.
pub type AssignmentMap = BTreeMap<String, String>;

/// A single parsed `name=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = ParamsError;

    /// Split on the first `=` only, so values may themselves contain `=`.
    /// Name and value are trimmed independently; the value may be empty.
    fn from_str(token: &str) -> Result<Self> {
        let Some((name, value)) = token.split_once('=') else {
            return Err(ParamsError::InvalidFormat {
                token: token.to_string(),
                reason: "must be in name=value format",
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ParamsError::InvalidFormat {
                token: token.to_string(),
                reason: "parameter name is required",
            });
        }

        Ok(Assignment {
            name: name.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Parse raw assignment tokens into a map of parameter names to values.
///
/// Tokens are applied in order and a repeated name keeps the value of its
/// last occurrence:
///
/// `[a=b c=abc1232=== d=banana d=pineapple]` becomes
/// `{a: b, c: abc1232===, d: pineapple}`.
///
/// The first malformed token aborts the whole parse.
pub fn parse_assignments<I, S>(tokens: I) -> Result<AssignmentMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assignments = AssignmentMap::new();

    for token in tokens {
        let Assignment { name, value } = token.as_ref().parse::<Assignment>()?;
        // Values may be secrets; only the name is logged.
        if assignments.contains_key(&name) {
            tracing::warn!(
                name = %name,
                "parameter assigned more than once, keeping the last value"
            );
        }
        assignments.insert(name, value);
    }

    tracing::debug!(count = assignments.len(), "parsed parameter assignments");
    Ok(assignments)
}
