//! Error types for lessonplan-bundler.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or emitting bundler configuration.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// Filesystem error while reading a config file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load.
    #[error("failed to parse bundler config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but cannot produce a working bundle.
    #[error("invalid bundler config: {0}")]
    Invalid(String),

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
