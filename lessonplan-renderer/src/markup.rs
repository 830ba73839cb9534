//! Markdown → HTML conversion for lesson sections.
//!
//! Conversion is done by comrak with raw HTML disabled: inline tags in the
//! source are replaced by a `<!-- raw HTML omitted -->` comment and links with
//! dangerous schemes (`javascript:`, `vbscript:`, `file:`, non-image `data:`)
//! get an empty `href`. The output is therefore safe to insert into a page
//! without further escaping.

use comrak::{markdown_to_html, Options};

/// Convert Markdown text to sanitized HTML.
pub fn to_html(text: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = false;
    markdown_to_html(text, &options)
}

/// Uppercase the first character of `name`, leaving the rest untouched.
///
/// `teaching_materials` becomes `Teaching_materials`. Applying it twice gives
/// the same result as applying it once.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
