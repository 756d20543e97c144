//! Markdown rendering of note content.
//!
//! Rendering is a pure function of the source text. The HTML form of a note
//! is never stored, so there is no cache to keep coherent.
use pulldown_cmark::{escape, html, Options, Parser};
use std::panic::{catch_unwind, AssertUnwindSafe};

fn cmark_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

/// Render Markdown source into an HTML fragment.
///
/// If the rendering pass faults on degenerate input, the source is returned
/// HTML-escaped instead, so the note stays displayable.
pub fn render_html(source: &str) -> String {
    catch_unwind(AssertUnwindSafe(|| {
        let parser = Parser::new_ext(source, cmark_options());
        let mut output = String::new();
        html::push_html(&mut output, parser);
        output
    }))
    .unwrap_or_else(|_| escape_html(source))
}

/// HTML-escape arbitrary text.
///
/// Any field that is displayed without going through [`render_html`]
/// must pass through here first.
pub fn escape_html(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    escape::escape_html(&mut escaped, source).expect("escaping into a String cannot fail");
    escaped
}
