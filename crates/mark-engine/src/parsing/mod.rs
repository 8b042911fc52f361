pub mod inline;
pub mod paragraphs;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use paragraphs::{ParagraphBreak, split_paragraphs};

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";

/// Knobs for [`translate_to_html_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    pub paragraph_break: ParagraphBreak,
}

/// Translates a whole document to HTML with default options.
///
/// Total: malformed or unbalanced markup degrades to literal text. Empty
/// (or whitespace-only) input yields an empty string rather than `<p></p>`.
pub fn translate_to_html(text: &str) -> String {
    translate_to_html_with(text, &TranslateOptions::default())
}

/// Translates a whole document to HTML.
///
/// Each paragraph is resolved independently and wrapped in `<p>...</p>`;
/// paragraphs are concatenated with no separator.
pub fn translate_to_html_with(text: &str, options: &TranslateOptions) -> String {
    let paragraphs = split_paragraphs(text, options.paragraph_break);
    log::debug!(
        "translating {} bytes as {} paragraph(s)",
        text.len(),
        paragraphs.len()
    );

    let mut out = String::with_capacity(text.len() + paragraphs.len() * 8);
    for paragraph in paragraphs {
        out.push_str(PARAGRAPH_OPEN);
        out.push_str(&render_paragraph(paragraph));
        out.push_str(PARAGRAPH_CLOSE);
    }
    out
}

/// Runs the inline pipeline (tokenize → match → render) over one paragraph.
///
/// No `<p>` wrapper is added; use this when paragraphs are split elsewhere.
pub fn render_paragraph(text: &str) -> String {
    let tokenized = inline::tokenize(text);
    let pairs = inline::match_marks(&tokenized.tokens);
    log::trace!(
        "{} candidate mark(s), {} accepted pair(s), {} escape(s)",
        tokenized.tokens.len(),
        pairs.len(),
        tokenized.escapes.len()
    );
    inline::render(text, &tokenized, &pairs)
}
