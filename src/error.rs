//! Error types for the paracluster manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Rendering errors: the manifest references data the config does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("template references missing field `{0}`")]
    MissingField(&'static str),
}

/// Errors surfaced by a single generator invocation. All of them are fatal.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Configuration file '{}' not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Error parsing configuration file '{}': {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Cannot apply --{flag}: `{path}` is not present in the configuration")]
    OverrideTarget {
        flag: &'static str,
        path: &'static str,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging setup failed: {0}")]
    LoggingError(String),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Replace the path carried by a file error, e.g. to report the path the user typed
    /// instead of the one it was resolved to. Other variants pass through unchanged.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            GeneratorError::ConfigNotFound(_) => GeneratorError::ConfigNotFound(path.into()),
            GeneratorError::ConfigParse { message, .. } => GeneratorError::ConfigParse {
                path: path.into(),
                message,
            },
            GeneratorError::Io { source, .. } => GeneratorError::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
