pub mod bundler;
pub mod diff;
pub mod render;
pub mod sheet;

use std::path::Path;

use anyhow::{Context, Result};

use lessonplan_core::{loader, LessonPlan};

/// Load a lesson file, annotating failures with the path.
pub(crate) fn load_lesson(path: &Path) -> Result<LessonPlan> {
    loader::load(path).with_context(|| format!("cannot load lesson plan '{}'", path.display()))
}
