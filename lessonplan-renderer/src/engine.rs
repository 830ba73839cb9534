//! Tera rendering engine — [`TemplateEngine`] and the lesson page [`Renderer`].
//!
//! # Templates
//!
//! | Name                           | Role                                   |
//! |--------------------------------|----------------------------------------|
//! | `base.html`                    | Document shell, links the JS bundle    |
//! | `lesson_plan/_details.html`    | Details panel (teacher, school, ...)   |
//! | `lesson_plan/plan_created.html`| Lesson page: details + section blocks  |
//!
//! Names ending in `.html` are autoescaped by tera. Section bodies are already
//! sanitized HTML and are emitted with `| safe`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tera::{Tera, Value};
use tracing::{debug, warn};

use lessonplan_core::{LessonPlan, SectionList};

use crate::context::{PageContext, RenderOptions};
use crate::error::RenderError;
use crate::markup::{capitalize_first, to_html};

/// Name of the lesson page template.
pub const PAGE_TEMPLATE: &str = "lesson_plan/plan_created.html";

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    (
        "lesson_plan/_details.html",
        include_str!("templates/lesson_plan/_details.html"),
    ),
    (PAGE_TEMPLATE, include_str!("templates/lesson_plan/plan_created.html")),
];

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

fn string_arg<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("filter `{filter}` expects a string")))
}

/// `{{ name | capfirst }}` — first character uppercased, rest unchanged.
fn capfirst_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(capitalize_first(string_arg("capfirst", value)?)))
}

/// `{{ text | markdown }}` — Markdown to sanitized HTML, marked safe.
struct MarkdownFilter;

impl tera::Filter for MarkdownFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        Ok(Value::String(to_html(string_arg("markdown", value)?)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// User overrides
// ---------------------------------------------------------------------------

/// Template name for an override file: its path under `root` joined with `/`,
/// extension normalised to `.html`. `None` for anything that is not `.html`.
fn override_name(root: &Path, path: &Path) -> Option<String> {
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
    if !is_html {
        return None;
    }
    let rel = path.strip_prefix(root).ok()?.with_extension("html");
    let parts: Vec<_> = rel
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

/// Every `.html` file below `root`, sorted by template name.
fn read_overrides(root: &Path) -> Result<Vec<(String, String)>, RenderError> {
    let io_err = |path: &Path, source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| io_err(&dir, e))? {
            let path = entry.map_err(|e| io_err(&dir, e))?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            match override_name(root, &path) {
                Some(name) => {
                    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
                    debug!(template = %name, "user template override");
                    found.push((name, contents));
                }
                None => warn!(path = %path.display(), "ignoring non-.html template override"),
            }
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// Embedded templates, then overrides from `user_template_dir`, plus the
/// `capfirst` and `markdown` filters.
fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: BTreeMap<String, String> = TPLS
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect();
    if let Some(dir) = user_template_dir.filter(|dir| dir.exists()) {
        templates.extend(read_overrides(dir)?);
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    tera.register_filter("capfirst", capfirst_filter);
    tera.register_filter("markdown", MarkdownFilter);
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.html` files that override embedded
/// defaults by relative path (e.g. `lesson_plan/_details.html`). Other files
/// are skipped with a warning.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load embedded templates plus any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the template `name` with the supplied context.
    pub fn render(&self, name: &str, ctx: &PageContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(name, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders the lesson plan page. Create once and reuse.
pub struct Renderer {
    engine: TemplateEngine,
    options: RenderOptions,
}

impl Renderer {
    /// Embedded templates, default link targets.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_options(RenderOptions::default(), None)
    }

    /// Custom link targets and an optional template override directory.
    pub fn with_options(
        options: RenderOptions,
        user_template_dir: Option<&Path>,
    ) -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(user_template_dir)?,
            options,
        })
    }

    /// Render the page for `lesson`, one titled block per entry of `sections`.
    ///
    /// Fails with [`RenderError::Lookup`] if a section is not a lesson field.
    pub fn render_page(
        &self,
        lesson: &LessonPlan,
        sections: &SectionList,
    ) -> Result<String, RenderError> {
        let ctx = PageContext::build(lesson, sections, &self.options)?;
        self.render_with_context(&ctx)
    }

    /// Render the page from a caller-provided [`PageContext`].
    pub fn render_with_context(&self, ctx: &PageContext) -> Result<String, RenderError> {
        self.engine.render(PAGE_TEMPLATE, ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_lesson;

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn page_contains_details_panel() {
        let html = Renderer::new()
            .unwrap()
            .render_page(&sample_lesson(), &SectionList::default())
            .unwrap();
        assert!(html.contains("Mary Banda"));
        assert!(html.contains("Kabulonga Primary"));
        assert!(html.contains("05 March, 2024"));
        assert!(html.contains("<dt>No. of pupils</dt>"));
        assert!(html.contains("<dd>42</dd>"));
    }

    #[test]
    fn metadata_is_escaped() {
        let mut lesson = sample_lesson();
        lesson.school = "<b>Kabulonga</b>".to_string();
        let html = Renderer::new()
            .unwrap()
            .render_page(&lesson, &SectionList::empty())
            .unwrap();
        assert!(!html.contains("<b>Kabulonga</b>"));
        assert!(html.contains("&lt;b&gt;Kabulonga"));
    }

    #[test]
    fn page_links_bundle_and_create_another() {
        let html = Renderer::new()
            .unwrap()
            .render_page(&sample_lesson(), &SectionList::empty())
            .unwrap();
        assert!(html.contains("<script src="));
        assert!(html.contains("bundle.js"));
        assert!(html.contains("Create another lesson plan"));
    }

    #[test]
    fn capfirst_filter_rejects_non_strings() {
        let err = capfirst_filter(&Value::from(3), &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("capfirst"));
    }

    #[test]
    fn override_names_use_relative_html_paths() {
        let root = Path::new("/site/templates");
        assert_eq!(
            override_name(root, &root.join("lesson_plan").join("plan_created.HTML")).as_deref(),
            Some("lesson_plan/plan_created.html")
        );
        assert_eq!(override_name(root, &root.join("base.html")).as_deref(), Some("base.html"));
        assert_eq!(override_name(root, &root.join("notes.txt")), None);
        assert_eq!(override_name(root, &root.join("README")), None);
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let html = Renderer::new()
            .unwrap()
            .render_page(&sample_lesson(), &SectionList::default())
            .unwrap();
        assert!(!html.contains('\r'));
    }
}
