//! Read-only model of a bundle's parameter schema.
//!
//! Bundles are authored elsewhere and arrive as `bundle.json`. Only the parts
//! needed to trace a parameter to its definition are modelled; everything
//! else in the document is ignored.
//!
//! ```text
//! {
//!   "parameters": { "secret": { "definition": "def1" } },
//!   "definitions": { "def1": { "type": "string", "$comment": "porter-internal" } }
//! }
//! ```

use crate::error::{ParamsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Parameter and definition tables of a bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,

    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,
}

/// A bundle parameter. Its shape lives in the referenced definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the entry in [`Bundle::definitions`].
    pub definition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,
}

/// A JSON-schema-like definition record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Free-text annotation; also carries the internal-parameter marker.
    #[serde(rename = "$comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Bundle {
    /// Load a bundle from a `bundle.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| ParamsError::storage(path, e))?;
        let bundle: Bundle =
            serde_json::from_slice(&data).map_err(|e| ParamsError::format(path, e))?;

        tracing::debug!(
            path = %path.display(),
            parameters = bundle.parameters.len(),
            definitions = bundle.definitions.len(),
            "loaded bundle"
        );
        Ok(bundle)
    }

    /// Parse a bundle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParamsError::format("<string>", e))
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Look up a definition by name.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// The definition a parameter refers to, if both exist.
    pub fn definition_for(&self, parameter: &str) -> Option<&Definition> {
        self.parameter(parameter)
            .and_then(|p| self.definition(&p.definition))
    }
}
