//! Markdown rendering for activity suggestions.
//!
//! The backend answers with markdown (headings, bold titles, numbered lists).
//! The browser view injects the rendered HTML into the result panel, so raw
//! HTML in the reply is dropped rather than passed through.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render backend markdown to HTML safe to assign to `innerHTML`.
#[must_use]
pub fn render_activities_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
