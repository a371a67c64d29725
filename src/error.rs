//! Error types for bundle-params.
//!
//! Uses thiserror for derive macros. Each variant carries enough context
//! (the offending token or file path) to be actionable on its own.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bundle-params operations.
#[derive(Error, Debug)]
pub enum ParamsError {
    /// An assignment token is not of the form `name=value`, or has an empty name.
    #[error("invalid parameter ({token}), {reason}")]
    InvalidFormat { token: String, reason: &'static str },

    /// A file could not be read or written.
    #[error("failed to access '{}': {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content could not be deserialized into the expected shape.
    #[error("failed to parse '{}': {detail}", .path.display())]
    Format { path: PathBuf, detail: String },

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),
}

impl ParamsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParamsError::InvalidFormat { .. } => exit_codes::USER_ERROR,
            ParamsError::Storage { .. } => exit_codes::STORAGE_FAILURE,
            ParamsError::Format { .. } => exit_codes::FORMAT_FAILURE,
            ParamsError::UserError(_) => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParamsError::Storage {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        ParamsError::Format {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

/// Result type alias for bundle-params operations.
pub type Result<T> = std::result::Result<T, ParamsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn invalid_format_is_a_user_error() {
        let err = ParamsError::InvalidFormat {
            token: "novalue".to_string(),
            reason: "must be in name=value format",
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            err.to_string(),
            "invalid parameter (novalue), must be in name=value format"
        );
    }

    #[test]
    fn storage_error_keeps_io_cause() {
        let err = ParamsError::storage(
            "missing.yaml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.exit_code(), exit_codes::STORAGE_FAILURE);
        assert!(err.to_string().contains("missing.yaml"));

        let source = err.source().expect("storage error has a source");
        let io_err = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn format_error_has_correct_exit_code() {
        let err = ParamsError::format("set.yaml", "expected a mapping");
        assert_eq!(err.exit_code(), exit_codes::FORMAT_FAILURE);
        assert_eq!(
            err.to_string(),
            "failed to parse 'set.yaml': expected a mapping"
        );
    }

    #[test]
    fn user_error_message_is_verbatim() {
        let err = ParamsError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "bad argument");
    }
}
