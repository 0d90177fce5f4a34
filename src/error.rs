//! Error types for traefik-validate.
//!
//! The validator and corrector never fail; these errors only come from the
//! file, configuration and process boundaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::analyzer::traefik::parser::ParseError;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The path given on the command line is not a directory.
    #[error("'{}' is not a valid directory", .0.display())]
    InvalidPath(PathBuf),
}

/// Errors loading `.traefik-validate.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    ParsingFailed { path: PathBuf, message: String },

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias for traefik-validate operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;
