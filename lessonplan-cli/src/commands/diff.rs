//! `lessonplan diff <lesson> <existing.html>` — unified diff against a fresh render.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use similar::TextDiff;

use crate::output::{normalize_line_endings, read_existing_or_empty};
use crate::{LinksArg, SectionsArg};

use super::render::render_lesson_file;

/// Show what `render` would change in an existing page.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Lesson plan file (.yaml, .yml or .json).
    pub lesson: PathBuf,

    /// Previously rendered page. A missing file diffs as empty.
    pub existing: PathBuf,

    #[command(flatten)]
    pub sections: SectionsArg,

    #[command(flatten)]
    pub links: LinksArg,

    /// Directory of `.html` templates overriding the embedded ones.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let rendered = render_lesson_file(
            &self.lesson,
            &self.sections.resolve(),
            self.templates.as_deref(),
            self.links.into(),
        )?;
        let rendered = normalize_line_endings(&rendered);
        let existing = read_existing_or_empty(&self.existing)?;

        if existing == rendered {
            println!("No differences for '{}'.", self.existing.display());
            return Ok(());
        }

        let old_header = format!("a/{}", self.existing.display());
        let new_header = format!("b/{}", self.existing.display());
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();
        print!("{unified}");
        if !unified.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
