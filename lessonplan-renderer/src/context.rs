//! Page context — serializable rendering payload built from a [`LessonPlan`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use lessonplan_core::{LessonPlan, SectionList};

use crate::error::RenderError;
use crate::markup::{capitalize_first, to_html};

/// Link targets the page embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Target of the "Create another lesson plan" link.
    pub create_url: String,
    /// Public URL of the bundled client script.
    pub bundle_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            create_url: "/".to_string(),
            bundle_url: "/static/dist/bundle.js".to_string(),
        }
    }
}

/// Everything the lesson page template sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub lesson: LessonCtx,
    /// Details panel rows, in display order.
    pub details: Vec<DetailRow>,
    /// One entry per requested section, in list order.
    pub sections: Vec<SectionCtx>,
    pub links: RenderOptions,
}

/// Lesson metadata, pre-formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCtx {
    pub title: String,
    pub teacher_name: String,
    pub date: String,
    pub school: String,
    pub time: String,
    pub grade: String,
    pub duration: String,
    pub subject: String,
    pub num_pupils: u32,
    pub topic: String,
    pub sub_topic: String,
    pub gender: String,
}

/// A single labelled value in the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// A rendered content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCtx {
    /// Field name as listed, e.g. `teaching_materials`.
    pub name: String,
    /// Heading text, the name with its first character uppercased.
    pub title: String,
    /// Sanitized HTML converted from the field's Markdown.
    pub html: String,
}

/// `%d %B, %Y`, e.g. `05 March, 2024`.
pub(crate) fn display_date(lesson: &LessonPlan) -> String {
    lesson.date.format("%d %B, %Y").to_string()
}

/// Details panel rows shared by the page and the printable sheet.
pub fn detail_rows(lesson: &LessonPlan) -> Vec<DetailRow> {
    let row = |label: &str, value: String| DetailRow {
        label: label.to_string(),
        value,
    };
    vec![
        row("Name", lesson.teacher_name.clone()),
        row("Date", display_date(lesson)),
        row("School", lesson.school.clone()),
        row("Time", lesson.time.clone()),
        row("Grade", lesson.grade.clone()),
        row("Duration", lesson.duration.clone()),
        row("Subject", lesson.subject.clone()),
        row("No. of pupils", lesson.num_pupils.to_string()),
        row("Topic", lesson.topic.clone()),
        row("Gender", lesson.gender.clone()),
        row("Sub-topic", lesson.sub_topic.clone()),
    ]
}

/// Resolve and convert every section in `sections`, in order.
///
/// Stops at the first name that is not a lesson field.
pub fn resolve_sections(
    lesson: &LessonPlan,
    sections: &SectionList,
) -> Result<Vec<SectionCtx>, RenderError> {
    sections
        .iter()
        .map(|name| -> Result<SectionCtx, RenderError> {
            let text = lesson.section(name)?;
            debug!(section = %name, bytes = text.len(), "rendering section");
            Ok(SectionCtx {
                name: name.to_string(),
                title: capitalize_first(name.as_str()),
                html: to_html(&text),
            })
        })
        .collect()
}

impl PageContext {
    /// Build a [`PageContext`] for `lesson`, showing `sections` in order.
    pub fn build(
        lesson: &LessonPlan,
        sections: &SectionList,
        links: &RenderOptions,
    ) -> Result<Self, RenderError> {
        let sections = resolve_sections(lesson, sections)?;
        Ok(PageContext {
            lesson: LessonCtx {
                title: lesson.to_string(),
                teacher_name: lesson.teacher_name.clone(),
                date: display_date(lesson),
                school: lesson.school.clone(),
                time: lesson.time.clone(),
                grade: lesson.grade.clone(),
                duration: lesson.duration.clone(),
                subject: lesson.subject.clone(),
                num_pupils: lesson.num_pupils,
                topic: lesson.topic.clone(),
                sub_topic: lesson.sub_topic.clone(),
                gender: lesson.gender.clone(),
            },
            details: detail_rows(lesson),
            sections,
            links: links.clone(),
        })
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
