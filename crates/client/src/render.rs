//! Markdown rendering for public content.
//!
//! Post and page bodies are authored as GitHub Flavored Markdown; this
//! module turns them into HTML for whatever front end consumes the reader.

use comrak::{Options, markdown_to_html};

/// Render markdown to HTML with GitHub Flavored Markdown support.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    markdown_to_html(content, &options)
}

/// Estimate reading time in minutes (average 200 words per minute).
///
/// Never returns zero; the shortest body still reads as one minute.
#[must_use]
pub fn reading_time_minutes(content: &str) -> u32 {
    let word_count = content.split_whitespace().count();
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let minutes = ((word_count as f32) / 200.0).ceil() as u32;
    minutes.max(1)
}
