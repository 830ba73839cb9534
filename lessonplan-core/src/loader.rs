//! Lesson file loading.
//!
//! Lesson records arrive as YAML (`.yaml` / `.yml`) or JSON (`.json`) files;
//! the format is chosen from the extension.

use std::path::Path;

use crate::error::LessonError;
use crate::types::LessonPlan;

/// Serialization format of a lesson file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonFormat {
    Yaml,
    Json,
}

impl LessonFormat {
    /// Pick a format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a lesson plan from an in-memory string.
///
/// `origin` is only used to annotate parse errors.
pub fn parse_str(
    contents: &str,
    format: LessonFormat,
    origin: &Path,
) -> Result<LessonPlan, LessonError> {
    let parsed: Result<LessonPlan, Box<dyn std::error::Error + Send + Sync>> = match format {
        LessonFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| Box::new(e) as _),
        LessonFormat::Json => serde_json::from_str(contents).map_err(|e| Box::new(e) as _),
    };
    parsed.map_err(|source| LessonError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load a lesson plan from `path`.
///
/// Returns [`LessonError::UnsupportedFormat`] for unknown extensions and
/// [`LessonError::Parse`] (with path) for malformed content.
pub fn load(path: &Path) -> Result<LessonPlan, LessonError> {
    let format = LessonFormat::from_path(path).ok_or_else(|| LessonError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents, format, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(LessonFormat::from_path(Path::new("a.yaml")), Some(LessonFormat::Yaml));
        assert_eq!(LessonFormat::from_path(Path::new("a.YML")), Some(LessonFormat::Yaml));
        assert_eq!(LessonFormat::from_path(Path::new("a.json")), Some(LessonFormat::Json));
        assert_eq!(LessonFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(LessonFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load(Path::new("/does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, LessonError::UnsupportedFormat { .. }));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let origin = PathBuf::from("broken.yaml");
        let err = parse_str("teacher_name: [", LessonFormat::Yaml, &origin).unwrap_err();
        match err {
            LessonError::Parse { path, .. } => assert_eq!(path, origin),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
