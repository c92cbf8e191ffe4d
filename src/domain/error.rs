use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::identity::ValidationError;
use super::merge::MergeError;

/// Library-wide error type for koolbuilder operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resolution of the controller configuration failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The customizable file could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Underlying I/O failure on a known path.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Artifact path escapes the output directory.
    #[error("Path escapes output directory: {0}")]
    PathTraversal(String),

    /// Configuration document could not be retrieved.
    #[error("Failed to fetch configuration from '{location}': {details}")]
    Fetch { location: String, details: String },

    /// Configuration document is not valid YAML for the expected shape.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Template lookup or rendering failed.
    #[error("Failed to render template '{template}': {details}")]
    Template { template: String, details: String },

    /// Post-generation hook exited unsuccessfully.
    #[error("Post-generation hook '{command}' failed: {details}")]
    HookFailed { command: String, details: String },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers classifying failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io { source, .. } => source.kind(),
            AppError::Validation(_)
            | AppError::Merge(_)
            | AppError::ConfigParse(_)
            | AppError::Template { .. }
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::Fetch { .. } => io::ErrorKind::NotFound,
            AppError::HookFailed { .. } => io::ErrorKind::Other,
        }
    }
}
