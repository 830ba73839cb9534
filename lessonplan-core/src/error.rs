//! Error types for lessonplan-core.

use std::path::PathBuf;

use thiserror::Error;

/// A field lookup by name failed.
///
/// Raised when a section list names an attribute the lesson record does not
/// carry. Never recovered locally; renderers propagate it as a render failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lesson plan has no field named '{name}'")]
    UnknownField { name: String },
}

/// All errors that can arise from loading lesson records.
#[derive(Debug, Error)]
pub enum LessonError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error on load — includes the file path.
    #[error("failed to parse lesson plan at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported lesson file format at {path}; expected .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf },
}
