/// A byte range `[start, end)` into a paragraph's text.
///
/// Tokens and matched pairs store spans rather than copied text, so the
/// renderer can splice tags in place and copy everything else verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies strictly between the two ends of `self`.
    ///
    /// Used for "inside a code span" checks, where the delimiters themselves
    /// are not considered interior.
    #[must_use]
    pub fn strictly_contains(self, other: Span) -> bool {
        self.start < other.start && other.end < self.end
    }
}
