//! Error types for the coverkit CLI.
//!
//! Uses thiserror for derive macros. Every variant names the stage that failed
//! so the message printed by `main` is enough to locate the problem.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coverkit operations.
#[derive(Error, Debug)]
pub enum CoverkitError {
    /// A configuration or environment file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file decoded but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No schema resource exists for the requested document type.
    #[error("schema not found for '{doc_type}' in '{}'", dir.display())]
    SchemaNotFound { doc_type: String, dir: PathBuf },

    /// The schema resource exists but is not well-formed structured data.
    #[error("failed to parse schema '{}': {message}", path.display())]
    SchemaParse { path: PathBuf, message: String },

    /// A recipe read a key that the loaded schema does not define.
    #[error("schema '{doc_type}' is missing required key '{key}'")]
    SchemaKey { doc_type: String, key: String },

    /// A required field was empty or malformed after collection.
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// Interactive value collection failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// The paginated backend could not render the document.
    #[error("render failed: {0}")]
    Render(String),

    /// The output directory or file could not be written.
    #[error("output failed: {0}")]
    Output(String),
}

impl CoverkitError {
    /// Shorthand for an [`CoverkitError::InvalidField`] error.
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        CoverkitError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoverkitError::InvalidField { .. } | CoverkitError::Prompt(_) => exit_codes::USER_ERROR,
            CoverkitError::ConfigRead { .. } | CoverkitError::InvalidConfig(_) => {
                exit_codes::CONFIG_FAILURE
            }
            CoverkitError::SchemaNotFound { .. }
            | CoverkitError::SchemaParse { .. }
            | CoverkitError::SchemaKey { .. } => exit_codes::SCHEMA_FAILURE,
            CoverkitError::Render(_) | CoverkitError::Output(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for coverkit operations.
pub type Result<T> = std::result::Result<T, CoverkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_has_user_exit_code() {
        let err = CoverkitError::invalid_field("company", "must not be empty");
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            err.to_string(),
            "invalid field 'company': must not be empty"
        );
    }

    #[test]
    fn config_read_has_config_exit_code() {
        let err = CoverkitError::ConfigRead {
            path: PathBuf::from(".env"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
        assert!(err.to_string().contains("'.env'"));
    }

    #[test]
    fn schema_errors_have_schema_exit_code() {
        let err = CoverkitError::SchemaKey {
            doc_type: "cover-letter".to_string(),
            key: "signature".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
        assert_eq!(
            err.to_string(),
            "schema 'cover-letter' is missing required key 'signature'"
        );

        let err = CoverkitError::SchemaNotFound {
            doc_type: "summary-short".to_string(),
            dir: PathBuf::from("formats"),
        };
        assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
    }

    #[test]
    fn output_errors_have_render_exit_code() {
        assert_eq!(
            CoverkitError::Output("disk full".to_string()).exit_code(),
            exit_codes::RENDER_FAILURE
        );
        assert_eq!(
            CoverkitError::Render("bad font".to_string()).exit_code(),
            exit_codes::RENDER_FAILURE
        );
    }
}
