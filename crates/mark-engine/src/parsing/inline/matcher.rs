//! Resolves candidate marks into accepted pairs.
//!
//! Two passes over the token sequence:
//!
//! 1. **Code spans.** Backticks pair up strictly left to right. Underscore
//!    tokens inside a matched code span are dropped; the span is a raw zone.
//! 2. **Emphasis and strong.** Remaining underscore tokens run through a
//!    bounded stack. Openers push (unless the top is the same kind, or the
//!    stack is full); closers pop only a same-kind top. Anything rejected is
//!    forgotten and renders as literal text.
//!
//! Stack discipline makes the accepted pairs non-crossing, and code spans
//! can only be disjoint from or nested inside underscore pairs because no
//! underscore token survives inside them.

use std::iter::Peekable;

use super::{
    kinds::MarkKind,
    types::{MarkRole, MarkToken, MatchedPair},
};

/// Maximum number of emphasis/strong marks open at the same time.
pub const MAX_OPEN_MARKS: usize = 3;

/// Matches a paragraph's tokens into well-nested pairs, ordered by opening position.
pub fn match_marks(tokens: &[MarkToken]) -> Vec<MatchedPair> {
    let code_spans = match_code_spans(tokens);
    let mut pairs = match_underscores(OutsideCode::new(tokens, &code_spans));
    pairs.extend(code_spans);
    pairs.sort_by_key(|p| p.open.start);
    pairs
}

fn match_code_spans(tokens: &[MarkToken]) -> Vec<MatchedPair> {
    let mut ticks = tokens.iter().filter(|t| t.kind == MarkKind::Code);
    let mut spans = vec![];

    while let Some(open) = ticks.next() {
        match ticks.next() {
            Some(close) => spans.push(MatchedPair::new(MarkKind::Code, open.span, close.span)),
            None => log::trace!("unmatched backtick at {}", open.position()),
        }
    }

    spans
}

fn match_underscores<'t>(tokens: impl Iterator<Item = &'t MarkToken>) -> Vec<MatchedPair> {
    let mut stack: Vec<MarkToken> = Vec::with_capacity(MAX_OPEN_MARKS);
    let mut pairs = vec![];

    for &token in tokens {
        match token.role {
            MarkRole::Opening => {
                if stack.last().is_some_and(|top| top.kind == token.kind) {
                    log::trace!(
                        "{:?} at {} cannot open directly inside itself",
                        token.kind,
                        token.position()
                    );
                } else if stack.len() >= MAX_OPEN_MARKS {
                    log::trace!(
                        "{:?} at {} exceeds nesting depth {MAX_OPEN_MARKS}",
                        token.kind,
                        token.position()
                    );
                } else {
                    stack.push(token);
                }
            }
            MarkRole::Closing => match stack.last() {
                Some(&top) if top.kind == token.kind => {
                    stack.pop();
                    pairs.push(MatchedPair::new(token.kind, top.span, token.span));
                }
                // Never pop through a mismatched mark
                _ => log::trace!(
                    "{:?} at {} closes nothing",
                    token.kind,
                    token.position()
                ),
            },
            // Backticks are resolved by the code span pass
            MarkRole::Either => {}
        }
    }

    for token in &stack {
        log::trace!("unmatched {:?} at {}", token.kind, token.position());
    }

    pairs
}

/// Underscore tokens that do not fall inside any matched code span.
///
/// Both inputs are in source order, so a single forward walk suffices.
struct OutsideCode<'t> {
    tokens: std::slice::Iter<'t, MarkToken>,
    spans: Peekable<std::slice::Iter<'t, MatchedPair>>,
}

impl<'t> OutsideCode<'t> {
    fn new(tokens: &'t [MarkToken], spans: &'t [MatchedPair]) -> Self {
        Self {
            tokens: tokens.iter(),
            spans: spans.iter().peekable(),
        }
    }
}

impl<'t> Iterator for OutsideCode<'t> {
    type Item = &'t MarkToken;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.tokens.by_ref() {
            if token.kind == MarkKind::Code {
                continue;
            }
            while self
                .spans
                .next_if(|s| s.close.end <= token.span.start)
                .is_some()
            {}
            let inside = self
                .spans
                .peek()
                .is_some_and(|s| s.full().strictly_contains(token.span));
            if !inside {
                return Some(token);
            }
        }
        None
    }
}
