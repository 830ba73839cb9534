//! Printable plain-text lesson sheet.
//!
//! Layout: a two-line title, a bordered four-column details grid
//! (`LABEL:`, value, `LABEL:`, value), then one block per section with an
//! upper-cased heading and the section's raw Markdown text.

use tabled::{builder::Builder, settings::Style};

use lessonplan_core::{LessonPlan, SectionList};

use crate::context::detail_rows;
use crate::error::RenderError;

const SHEET_TITLE: &str = "MINISTRY OF GENERAL EDUCATION BOARD\nLESSON PLAN";

/// `teaching_materials` → `TEACHING MATERIALS`.
pub fn sheet_heading(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

fn details_grid(lesson: &LessonPlan) -> String {
    let cells: Vec<(String, String)> = detail_rows(lesson)
        .into_iter()
        .map(|row| (format!("{}:", row.label.to_uppercase()), row.value))
        .collect();

    let mut builder = Builder::default();
    for pair in cells.chunks(2) {
        let (left_label, left_value) = pair[0].clone();
        let (right_label, right_value) = pair.get(1).cloned().unwrap_or_default();
        builder.push_record([left_label, left_value, right_label, right_value]);
    }
    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

/// Render the printable sheet for `lesson`, listing `sections` in order.
///
/// Fails with [`RenderError::Lookup`] if a section is not a lesson field.
pub fn render_sheet(lesson: &LessonPlan, sections: &SectionList) -> Result<String, RenderError> {
    let mut out = String::new();
    out.push_str(SHEET_TITLE);
    out.push_str("\n\n");
    out.push_str(&details_grid(lesson));
    out.push('\n');

    for name in sections {
        let text = lesson.section(name)?;
        out.push_str(&format!(
            "\n{}\n{}\n",
            sheet_heading(name.as_str()),
            text.trim_end()
        ));
    }
    Ok(out)
}
