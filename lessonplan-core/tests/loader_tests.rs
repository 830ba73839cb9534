//! Lesson file loading tests for `lessonplan-core`.
//!
//! Each test writes into its own `TempDir` — no shared state.

use std::fs;

use chrono::NaiveDate;
use lessonplan_core::{loader, LessonError, LookupError, SectionList};
use rstest::rstest;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const LESSON_YAML: &str = r#"
teacher_name: Mary Banda
date: 2024-03-05
school: Kabulonga Primary
time: "08:00"
grade: "5"
duration: 40 minutes
subject: Mathematics
num_pupils: 42
topic: Fractions
sub_topic: Adding fractions
gender: Mixed
objectives: "**Goal**: learn fractions"
homework: |
  1. Exercise 4a
  2. Exercise 4b
"#;

const LESSON_JSON: &str = r#"{
  "teacher_name": "Mary Banda",
  "date": "2024-03-05",
  "school": "Kabulonga Primary",
  "time": "08:00",
  "grade": "5",
  "duration": "40 minutes",
  "subject": "Mathematics",
  "num_pupils": 42,
  "topic": "Fractions",
  "sub_topic": "Adding fractions",
  "gender": "Mixed",
  "objectives": "**Goal**: learn fractions"
}"#;

fn write_lesson(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write lesson file");
    path
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[rstest]
#[case::yaml("lesson.yaml", LESSON_YAML)]
#[case::yml("lesson.yml", LESSON_YAML)]
#[case::json("lesson.json", LESSON_JSON)]
fn loads_lesson_in_every_supported_format(#[case] file_name: &str, #[case] contents: &str) {
    let dir = TempDir::new().expect("tempdir");
    let path = write_lesson(&dir, file_name, contents);

    let plan = loader::load(&path).expect("load lesson");
    assert_eq!(plan.teacher_name, "Mary Banda");
    assert_eq!(plan.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(plan.num_pupils, 42);
    assert_eq!(plan.objectives, "**Goal**: learn fractions");
}

#[test]
fn omitted_sections_default_to_empty_text() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_lesson(&dir, "lesson.json", LESSON_JSON);

    let plan = loader::load(&path).expect("load lesson");
    assert_eq!(plan.conclusion, "");
    for name in &SectionList::default() {
        plan.section(name).expect("every default section is a field");
    }
}

#[test]
fn multiline_markup_is_preserved() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_lesson(&dir, "lesson.yaml", LESSON_YAML);

    let plan = loader::load(&path).expect("load lesson");
    assert_eq!(plan.homework, "1. Exercise 4a\n2. Exercise 4b\n");
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = loader::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LessonError::Io(_)), "got {err:?}");
}

#[test]
fn missing_metadata_is_parse_error_with_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_lesson(&dir, "partial.yaml", "teacher_name: Only Me\n");

    let err = loader::load(&path).unwrap_err();
    match err {
        LessonError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unknown_field_lookup_names_the_field() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_lesson(&dir, "lesson.yaml", LESSON_YAML);

    let plan = loader::load(&path).expect("load lesson");
    let err = plan.field("activities").unwrap_err();
    assert_eq!(
        err,
        LookupError::UnknownField {
            name: "activities".to_string()
        }
    );
    assert!(err.to_string().contains("activities"));
}
