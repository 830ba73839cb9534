//! Domain types for lesson plans.
//!
//! A [`LessonPlan`] is immutable at render time. Which of its free-text fields
//! get displayed, and in what order, is decided by a [`SectionList`].

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Content sections displayed when no explicit list is supplied.
pub const DEFAULT_SECTIONS: &[&str] = &[
    "objectives",
    "teaching_materials",
    "reference_materials",
    "introduction",
    "lesson_development",
    "conclusion",
    "recapitulation",
    "evaluation",
    "teacher_evaluation",
    "homework",
];

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a lesson plan field selected for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionName(pub String);

impl SectionName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SectionName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SectionName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Ordered list of section names to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionList(pub Vec<SectionName>);

impl SectionList {
    /// A list with no sections at all.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SectionList {
    fn default() -> Self {
        DEFAULT_SECTIONS.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for SectionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(SectionName::from).collect())
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a SectionName;
    type IntoIter = std::slice::Iter<'a, SectionName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a comma-separated list; blank entries are dropped.
///
/// Names are not checked against [`LessonPlan`] here. An unknown name only
/// fails once it is looked up during rendering.
impl FromStr for SectionList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split(',').map(str::trim).filter(|n| !n.is_empty()).collect())
    }
}

// ---------------------------------------------------------------------------
// LessonPlan
// ---------------------------------------------------------------------------

/// One lesson: metadata plus Markdown-formatted content sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub teacher_name: String,
    pub date: NaiveDate,
    pub school: String,
    pub time: String,
    pub grade: String,
    pub duration: String,
    pub subject: String,
    pub num_pupils: u32,
    pub topic: String,
    pub sub_topic: String,
    pub gender: String,

    #[serde(default)]
    pub objectives: String,
    #[serde(default)]
    pub teaching_materials: String,
    #[serde(default)]
    pub reference_materials: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub lesson_development: String,
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub recapitulation: String,
    #[serde(default)]
    pub evaluation: String,
    #[serde(default)]
    pub teacher_evaluation: String,
    #[serde(default)]
    pub homework: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LessonPlan {
    /// Look up any attribute by its field name.
    ///
    /// Text fields are borrowed; `num_pupils` and `date` are formatted
    /// (`date` as `YYYY-MM-DD`). Fails with [`LookupError::UnknownField`]
    /// for names that are not attributes of the record.
    pub fn field(&self, name: &str) -> Result<Cow<'_, str>, LookupError> {
        let value = match name {
            "teacher_name" => &self.teacher_name,
            "school" => &self.school,
            "time" => &self.time,
            "grade" => &self.grade,
            "duration" => &self.duration,
            "subject" => &self.subject,
            "topic" => &self.topic,
            "sub_topic" => &self.sub_topic,
            "gender" => &self.gender,
            "objectives" => &self.objectives,
            "teaching_materials" => &self.teaching_materials,
            "reference_materials" => &self.reference_materials,
            "introduction" => &self.introduction,
            "lesson_development" => &self.lesson_development,
            "conclusion" => &self.conclusion,
            "recapitulation" => &self.recapitulation,
            "evaluation" => &self.evaluation,
            "teacher_evaluation" => &self.teacher_evaluation,
            "homework" => &self.homework,
            "num_pupils" => return Ok(Cow::Owned(self.num_pupils.to_string())),
            "date" => return Ok(Cow::Owned(self.date.format("%Y-%m-%d").to_string())),
            other => {
                return Err(LookupError::UnknownField {
                    name: other.to_owned(),
                })
            }
        };
        Ok(Cow::Borrowed(value.as_str()))
    }

    /// [`field`](Self::field) keyed by a [`SectionName`].
    pub fn section(&self, name: &SectionName) -> Result<Cow<'_, str>, LookupError> {
        self.field(name.as_str())
    }
}

impl fmt::Display for LessonPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.sub_topic, self.date.format("%Y-%m-%d"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
