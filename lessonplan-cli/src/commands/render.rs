//! `lessonplan render <lesson> [--sections ...] [--out FILE]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use lessonplan_core::SectionList;
use lessonplan_renderer::{RenderOptions, Renderer};

use super::load_lesson;
use crate::output::write_if_changed;
use crate::{LinksArg, SectionsArg};

/// Render the lesson plan page as HTML.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Lesson plan file (.yaml, .yml or .json).
    pub lesson: PathBuf,

    #[command(flatten)]
    pub sections: SectionsArg,

    /// Write the page to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Directory of `.html` templates overriding the embedded ones.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    #[command(flatten)]
    pub links: LinksArg,

    /// Report what would be written without touching `--out`.
    #[arg(long, requires = "out")]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let html = render_lesson_file(
            &self.lesson,
            &self.sections.resolve(),
            self.templates.as_deref(),
            self.links.into(),
        )?;
        match self.out.as_deref() {
            Some(out) => write_if_changed(out, &html, self.dry_run)?.print(),
            None => print!("{html}"),
        }
        Ok(())
    }
}

/// Load `lesson_path` and render its page.
pub(crate) fn render_lesson_file(
    lesson_path: &Path,
    sections: &SectionList,
    templates: Option<&Path>,
    options: RenderOptions,
) -> Result<String> {
    let lesson = load_lesson(lesson_path)?;
    let renderer =
        Renderer::with_options(options, templates).context("failed to load page templates")?;
    renderer
        .render_page(&lesson, sections)
        .with_context(|| format!("failed to render '{}'", lesson_path.display()))
}
