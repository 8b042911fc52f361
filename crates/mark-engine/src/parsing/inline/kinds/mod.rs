//! # Mark Kinds
//!
//! Mark-specific types that own their delimiter characters and HTML tags.
//!
//! ## Types
//!
//! - **`MarkKind`**: `Emphasis` (`_`), `Strong` (`__`), `Code` (`` ` ``)
//! - **`Escape`**: `BACKSLASH`, the character that turns a following mark into text
//!
//! ## Design Principle
//!
//! All delimiter constants and tag strings live here, not scattered in the
//! tokenizer or renderer. Those stages call these constants; they never
//! hardcode `_` or `<em>`.

pub mod code_span;
pub mod escape;
pub mod underscore;

pub use code_span::CodeSpan;
pub use escape::Escape;
pub use underscore::Underscore;

/// The three kinds of inline mark.
///
/// Mark length is fixed per kind: one character for `Emphasis` and `Code`,
/// two for `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Emphasis,
    Strong,
    Code,
}

impl MarkKind {
    /// Number of mark characters that delimit this kind.
    pub const fn mark_len(self) -> usize {
        match self {
            MarkKind::Emphasis | MarkKind::Code => 1,
            MarkKind::Strong => Underscore::STRONG_RUN,
        }
    }

    pub const fn open_tag(self) -> &'static str {
        match self {
            MarkKind::Emphasis => "<em>",
            MarkKind::Strong => "<strong>",
            MarkKind::Code => "<code>",
        }
    }

    pub const fn close_tag(self) -> &'static str {
        match self {
            MarkKind::Emphasis => "</em>",
            MarkKind::Strong => "</strong>",
            MarkKind::Code => "</code>",
        }
    }

    /// Kind for an underscore run of the given length, if it is one of ours.
    ///
    /// Runs of three or more underscores are never markup.
    pub const fn from_underscore_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(MarkKind::Emphasis),
            Underscore::STRONG_RUN => Some(MarkKind::Strong),
            _ => None,
        }
    }
}
