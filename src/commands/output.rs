//! Rendering of command results.

use crate::config::OutputFormat;
use crate::error::{ParamsError, Result};
use serde::Serialize;

/// Render a value in the requested format, without a trailing newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    }
    .map_err(|e| ParamsError::UserError(format!("failed to render output: {}", e)))?;

    Ok(rendered.trim_end().to_string())
}

/// Render and print a value to stdout.
pub fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}
