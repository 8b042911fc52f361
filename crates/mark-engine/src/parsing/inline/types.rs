use crate::parsing::span::Span;

use super::kinds::MarkKind;

/// Directional classification of a mark, derived from its neighbouring characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkRole {
    Opening,
    Closing,
    /// Backticks: direction is decided by left-to-right pairing in the matcher.
    Either,
}

/// A candidate mark occurrence produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkToken {
    pub kind: MarkKind,
    pub role: MarkRole,
    /// Byte span of the mark characters themselves (`_`, `__` or `` ` ``).
    pub span: Span,
}

impl MarkToken {
    pub fn new(kind: MarkKind, role: MarkRole, start: usize) -> Self {
        Self {
            kind,
            role,
            span: Span::new(start, start + kind.mark_len()),
        }
    }

    /// Offset of the first mark character.
    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Output of the tokenizer for one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Candidate marks in source order.
    pub tokens: Vec<MarkToken>,
    /// Offsets of backslashes that escape a mark; the renderer drops them.
    pub escapes: Vec<usize>,
}

/// An accepted opening/closing pair.
///
/// # Invariants
///
/// - `open.end <= close.start`
/// - Across all pairs of one paragraph, ranges are either disjoint or nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair {
    pub kind: MarkKind,
    /// Span of the opening mark characters.
    pub open: Span,
    /// Span of the closing mark characters.
    pub close: Span,
}

impl MatchedPair {
    pub fn new(kind: MarkKind, open: Span, close: Span) -> Self {
        Self { kind, open, close }
    }

    /// The whole range covered by this pair, marks included.
    pub fn full(&self) -> Span {
        Span::new(self.open.start, self.close.end)
    }

    /// The content between the marks.
    pub fn inner(&self) -> Span {
        Span::new(self.open.end, self.close.start)
    }
}
