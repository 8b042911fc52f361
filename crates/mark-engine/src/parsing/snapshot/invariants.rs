use crate::parsing::inline::{
    MarkKind, MatchedPair, Tokenized,
    kinds::{CodeSpan, Escape, Underscore},
};
use crate::parsing::span::Span;

/// Validates tokenizer and matcher output for one paragraph.
///
/// Asserts that:
/// - Every token span lies in bounds and covers exactly its mark characters
/// - Every escape offset points at a backslash
/// - Every pair opens before it closes, with both marks of the pair's kind
/// - Any two pairs are either disjoint or strictly nested
/// - No emphasis/strong mark sits inside a code span
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, tokenized: &Tokenized, pairs: &[MatchedPair]) {
    let bytes = text.as_bytes();

    for t in &tokenized.tokens {
        assert_marks(bytes, t.kind, t.span);
    }

    for &at in &tokenized.escapes {
        assert_eq!(
            bytes.get(at),
            Some(&Escape::BACKSLASH),
            "escape offset {at} is not a backslash in {text:?}"
        );
    }

    for p in pairs {
        assert_marks(bytes, p.kind, p.open);
        assert_marks(bytes, p.kind, p.close);
        assert!(
            p.open.end <= p.close.start,
            "pair closes before it opens: {p:?}"
        );
    }

    for (i, a) in pairs.iter().enumerate() {
        for b in &pairs[i + 1..] {
            let (a, b) = (a.full(), b.full());
            let disjoint = a.end <= b.start || b.end <= a.start;
            let nested = a.strictly_contains(b) || b.strictly_contains(a);
            assert!(disjoint || nested, "pairs cross: {a:?} and {b:?}");
        }
    }

    for code in pairs.iter().filter(|p| p.kind == MarkKind::Code) {
        for p in pairs.iter().filter(|p| p.kind != MarkKind::Code) {
            assert!(
                !code.full().strictly_contains(p.open) && !code.full().strictly_contains(p.close),
                "{:?} pair {:?} inside code span {:?}",
                p.kind,
                p.full(),
                code.full()
            );
        }
    }
}

fn assert_marks(bytes: &[u8], kind: MarkKind, span: Span) {
    assert!(
        span.end <= bytes.len(),
        "{kind:?} span out of bounds: {span:?} (text len: {})",
        bytes.len()
    );
    assert_eq!(span.len(), kind.mark_len(), "{kind:?} span has wrong length: {span:?}");
    let mark = match kind {
        MarkKind::Code => CodeSpan::TICK,
        MarkKind::Emphasis | MarkKind::Strong => Underscore::MARK,
    };
    assert!(
        bytes[span.start..span.end].iter().all(|&b| b == mark),
        "{kind:?} span {span:?} does not cover mark characters"
    );
}
