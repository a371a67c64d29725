//! Configuration types and defaults for bundle-params.

use serde::{Deserialize, Serialize};

/// Format used when printing results to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// YAML (default).
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = ".bundle-params/config.yaml";

// Default value functions for serde
pub(crate) fn default_parameter_sets_dir() -> String {
    "parameters".to_string()
}
