use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// What counts as a paragraph separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParagraphBreak {
    /// A whitespace run holding at least two line feeds, i.e. a blank line.
    /// A single line break stays inside the paragraph.
    #[default]
    BlankLine,
    /// Any whitespace run holding a line feed.
    Line,
}

impl ParagraphBreak {
    /// Matches a whole separator run, including the whitespace around it.
    ///
    /// `\s` covers `\r`, so `\n` and `\r\n` endings may be mixed freely.
    fn separator(self) -> &'static Regex {
        static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
        static LINE: OnceLock<Regex> = OnceLock::new();
        match self {
            ParagraphBreak::BlankLine => BLANK_LINE.get_or_init(|| {
                Regex::new(r"\s*\n\s*\n\s*").expect("Invalid blank line regex")
            }),
            ParagraphBreak::Line => {
                LINE.get_or_init(|| Regex::new(r"\s*\n\s*").expect("Invalid line break regex"))
            }
        }
    }
}

/// Splits a document into trimmed, non-empty paragraph texts.
pub fn split_paragraphs(text: &str, paragraph_break: ParagraphBreak) -> Vec<&str> {
    paragraph_break
        .separator()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
