//! `lessonplan sheet <lesson> [--sections ...]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lessonplan_renderer::render_sheet;

use super::load_lesson;
use crate::SectionsArg;

/// Print a plain-text lesson sheet.
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// Lesson plan file (.yaml, .yml or .json).
    pub lesson: PathBuf,

    #[command(flatten)]
    pub sections: SectionsArg,
}

impl SheetArgs {
    pub fn run(self) -> Result<()> {
        let lesson = load_lesson(&self.lesson)?;
        let sheet = render_sheet(&lesson, &self.sections.resolve())
            .with_context(|| format!("failed to render sheet for '{}'", self.lesson.display()))?;
        print!("{sheet}");
        Ok(())
    }
}
