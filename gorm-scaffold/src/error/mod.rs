//! Error types and error handling
//!
//! Every failure during a generation run is fatal: schema fetch, template
//! rendering and file writes all surface as a [`ScaffoldError`] and bubble up
//! to the caller, which aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Generator error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Configuration could not be loaded or merged
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Connecting to the database or querying column metadata failed
    #[error("Database error while reading table '{table}': {source}")]
    Database {
        /// Table being introspected (empty when connecting)
        table: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// The table does not exist or has no columns
    #[error("Table not found or has no columns: '{0}'")]
    TableNotFound(String),

    /// A schema file could not be read
    #[error("Failed to read schema file '{}': {source}", path.display())]
    SchemaFile {
        /// Schema file path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// A schema file is not valid JSON of the expected shape
    #[error("Invalid schema file '{}': {source}", path.display())]
    SchemaParse {
        /// Schema file path
        path: PathBuf,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A template override could not be read
    #[error("Failed to read template '{}': {source}", path.display())]
    TemplateFile {
        /// Template file path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// A template failed to parse during registration
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// A template failed to render
    #[error("Failed to render template '{name}': {source}")]
    Render {
        /// Template name
        name: String,
        /// Render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Creating a directory or writing a generated file failed
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// Caller supplied an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<handlebars::TemplateError> for ScaffoldError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_message() {
        let err = ScaffoldError::TableNotFound("t_missing".to_string());
        assert_eq!(err.to_string(), "Table not found or has no columns: 't_missing'");
    }

    #[test]
    fn test_write_error_includes_path() {
        let err = ScaffoldError::Write {
            path: PathBuf::from("result/shop/module.go"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("result/shop/module.go"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_figment_error_converts() {
        let err: ScaffoldError = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, ScaffoldError::Config(_)));
    }
}
