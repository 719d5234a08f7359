//! Description Markdown
//!
//! Renders todo descriptions with pulldown-cmark. Raw HTML typed by the
//! user is shown as text.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render a description to HTML
pub fn parse_markdown(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}
