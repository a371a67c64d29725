//! Persisted parameter sets.
//!
//! A parameter set is a named, reusable collection of parameter sources
//! stored as YAML:
//!
//! ```text
//! name: mysql
//! created: 2020-01-01T00:00:00Z
//! modified: 2020-01-01T00:00:00Z
//! parameters:
//!   - name: port
//!     source:
//!       value: "3306"
//!   - name: password
//!     source:
//!       secret: mysql-password
//! ```
//!
//! Loading is deserialization only. Entries are never checked against a
//! bundle and sources are never resolved here.

use crate::error::{ParamsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A named collection of parameter source declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Name used to refer to the set.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Declarations in stored order.
    #[serde(default)]
    pub parameters: Vec<ParameterStrategy>,
}

/// One parameter declaration: a name and where its value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterStrategy {
    pub name: String,
    pub source: ValueSource,
}

/// Where a parameter's value is obtained.
///
/// Stored as a mapping from source kind to its argument, e.g.
/// `env: MYSQL_PORT` or `secret: mysql-password`. The set of kinds is open
/// and a single key is expected, but neither is enforced on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSource(BTreeMap<String, String>);

/// Source kind holding a literal value.
pub const LITERAL_SOURCE: &str = "value";

impl ValueSource {
    /// A source of the given kind.
    pub fn new(kind: impl Into<String>, argument: impl Into<String>) -> Self {
        ValueSource(BTreeMap::from([(kind.into(), argument.into())]))
    }

    /// A source holding a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(LITERAL_SOURCE, value)
    }

    /// Argument stored for `kind`, if present.
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.0.get(kind).map(String::as_str)
    }

    /// Source kinds in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl ParameterSet {
    /// Create an empty set stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        ParameterSet {
            name: name.into(),
            created: Some(now),
            modified: Some(now),
            parameters: Vec::new(),
        }
    }

    /// Load a parameter set from a YAML file.
    ///
    /// Read failures surface as [`ParamsError::Storage`] with the io error as
    /// source; malformed content as [`ParamsError::Format`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = std::fs::read(path).map_err(|e| ParamsError::storage(path, e))?;
        let set: ParameterSet =
            serde_yaml::from_slice(&data).map_err(|e| ParamsError::format(path, e))?;

        tracing::debug!(
            path = %path.display(),
            name = %set.name,
            parameters = set.parameters.len(),
            "loaded parameter set"
        );
        Ok(set)
    }

    /// Parse a parameter set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ParamsError::format("<string>", e))
    }

    /// Serialize the parameter set to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ParamsError::UserError(format!("failed to serialize parameter set: {}", e))
        })
    }

    /// Atomically save the parameter set as YAML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        crate::fs::atomic_write_file(path, &self.to_yaml()?)?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved parameter set");
        Ok(())
    }

    /// Save the parameter set only if no file exists at `path`.
    ///
    /// An existing file, including one created concurrently, is left
    /// untouched and reported as a [`ParamsError::Storage`] error of kind
    /// `AlreadyExists`.
    pub fn save_new<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        crate::fs::atomic_write_new(path, self.to_yaml()?.as_bytes())?;
        tracing::debug!(path = %path.display(), name = %self.name, "created parameter set");
        Ok(())
    }

    /// Append a declaration and bump `modified`.
    pub fn push(&mut self, name: impl Into<String>, source: ValueSource) {
        self.parameters.push(ParameterStrategy {
            name: name.into(),
            source,
        });
        self.modified = Some(Utc::now());
    }

    /// Parameter names in stored order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }
}
