//! # lessonplan-renderer
//!
//! Renders a lesson plan page: a details panel plus one titled block per
//! requested section, each converted from Markdown to sanitized HTML.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lessonplan_core::{LessonPlan, SectionList};
//! use lessonplan_renderer::Renderer;
//!
//! fn show(lesson: &LessonPlan) {
//!     if let Ok(renderer) = Renderer::new() {
//!         match renderer.render_page(lesson, &SectionList::default()) {
//!             Ok(html) => println!("{html}"),
//!             Err(e) => eprintln!("render failed: {e}"),
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod markup;
pub mod sheet;

pub use context::{PageContext, RenderOptions, SectionCtx};
pub use engine::{Renderer, TemplateEngine, PAGE_TEMPLATE};
pub use error::RenderError;
pub use markup::{capitalize_first, to_html};
pub use sheet::render_sheet;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use lessonplan_core::LessonPlan;

    pub(crate) fn sample_lesson() -> LessonPlan {
        LessonPlan {
            teacher_name: "Mary Banda".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).expect("date"),
            school: "Kabulonga Primary".to_string(),
            time: "08:00".to_string(),
            grade: "5".to_string(),
            duration: "40 minutes".to_string(),
            subject: "Mathematics".to_string(),
            num_pupils: 42,
            topic: "Fractions".to_string(),
            sub_topic: "Adding fractions".to_string(),
            gender: "Mixed".to_string(),
            objectives: "**Goal**: learn fractions".to_string(),
            teaching_materials: "- fraction strips\n- chalkboard".to_string(),
            reference_materials: "Grade 5 Mathematics Pupil's Book".to_string(),
            introduction: "Recap halves and quarters.".to_string(),
            lesson_development: "1. Model 1/4 + 1/4\n2. Pair work".to_string(),
            conclusion: "Summarise common denominators.".to_string(),
            recapitulation: "Pupils explain the rule.".to_string(),
            evaluation: "Five-question quiz.".to_string(),
            teacher_evaluation: "Most pupils met the goal.".to_string(),
            homework: "Exercise 4a".to_string(),
            created_at: None,
        }
    }
}
