//! Lesson plan core library — domain types, field lookup, lesson file loading.
//!
//! Public API surface:
//! - [`types`] — [`LessonPlan`], [`SectionName`], [`SectionList`]
//! - [`error`] — [`LessonError`], [`LookupError`]
//! - [`loader`] — read lesson files from YAML or JSON

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LessonError, LookupError};
pub use types::{LessonPlan, SectionList, SectionName, DEFAULT_SECTIONS};
