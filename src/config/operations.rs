//! Config loading, validation, and path resolution.

use super::model::Config;
use super::types::DEFAULT_CONFIG_PATH;
use crate::error::{ParamsError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ParamsError::Storage)` - The file could not be read
    /// * `Err(ParamsError::Format)` - The YAML could not be parsed
    /// * `Err(ParamsError::UserError)` - Validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| ParamsError::storage(path, e))?;
        let mut config: Config =
            serde_yaml::from_str(&content).map_err(|e| ParamsError::format(path, e))?;
        config.validate()?;

        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise the default location under
    /// `cwd` is used when present, falling back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = cwd.join(DEFAULT_CONFIG_PATH);
        if default_path.is_file() {
            return Self::load(default_path);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self {
            base_dir: Some(cwd.to_path_buf()),
            ..Self::default()
        })
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(yaml).map_err(|e| ParamsError::format("<string>", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// `parameter_sets_dir` must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.parameter_sets_dir.trim().is_empty() {
            return Err(ParamsError::UserError(
                "config validation failed: parameter_sets_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory holding named parameter sets.
    pub fn parameter_sets_path(&self) -> PathBuf {
        let dir = Path::new(&self.parameter_sets_dir);
        match &self.base_dir {
            Some(base) if dir.is_relative() => base.join(dir),
            _ => dir.to_path_buf(),
        }
    }

    /// File path of the named parameter set.
    ///
    /// Names must be a single path component so a set cannot escape the
    /// parameter set directory.
    pub fn parameter_set_path(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !valid {
            return Err(ParamsError::UserError(format!(
                "invalid parameter set name '{}'",
                name
            )));
        }

        Ok(self.parameter_sets_path().join(format!("{}.yaml", name)))
    }
}
