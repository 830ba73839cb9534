//! Error types for lessonplan-renderer.

use std::path::PathBuf;

use thiserror::Error;

use lessonplan_core::LookupError;

/// All errors that can arise from page rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A section named in the list is not a field of the lesson plan.
    #[error("cannot render section: {0}")]
    Lookup(#[from] LookupError),

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
