//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for bundle-params.
///
/// This struct represents the contents of `.bundle-params/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding named parameter sets (`<dir>/<name>.yaml`).
    ///
    /// Relative paths resolve against the directory of the config file.
    #[serde(default = "default_parameter_sets_dir")]
    pub parameter_sets_dir: String,

    /// Default output format for command results.
    #[serde(default)]
    pub output: OutputFormat,

    /// Directory the config was loaded from; `None` for built-in defaults.
    #[serde(skip)]
    pub(crate) base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameter_sets_dir: default_parameter_sets_dir(),
            output: OutputFormat::default(),
            base_dir: None,
        }
    }
}
