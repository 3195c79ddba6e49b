//! Error types for nbkit operations.
//!
//! This module defines [`NbkitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The bootstrapper is fail-fast: a managed command exiting non-zero
//!   becomes [`NbkitError::CommandFailed`] and aborts the whole flow
//! - The link checker is fail-soft: transport failures are reported per
//!   URL and never surface here
//! - Use `anyhow::Error` (via `NbkitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nbkit operations.
#[derive(Debug, Error)]
pub enum NbkitError {
    /// Shell command exited non-zero or could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Notebook file could not be parsed as an ipynb document.
    #[error("Failed to parse notebook {path}: {message}")]
    NotebookParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nbkit operations.
pub type Result<T> = std::result::Result<T, NbkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = NbkitError::CommandFailed {
            command: "idaes get-extensions".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("idaes get-extensions"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn command_failed_without_code() {
        let err = NbkitError::CommandFailed {
            command: "apt-get install -y -qq glpk-utils".into(),
            code: None,
        };
        assert!(err.to_string().contains("None"));
    }

    #[test]
    fn notebook_parse_displays_path_and_message() {
        let err = NbkitError::NotebookParse {
            path: PathBuf::from("/course/notebooks/01-publish/intro.ipynb"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("intro.ipynb"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NbkitError = io_err.into();
        assert!(matches!(err, NbkitError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(NbkitError::CommandFailed {
                command: "false".into(),
                code: Some(1),
            })
        }
        assert!(returns_error().is_err());
    }
}
