use std::fmt::Write;

use crate::parsing::inline::{MarkKind, MatchedPair};

/// Outline of accepted pairs for snapshot testing.
///
/// One line per pair, in opening order, indented by nesting depth:
///
/// ```text
/// strong 5..25 "blah _blah_ blah"
///   em 12..18 "blah"
/// ```
///
/// Ranges cover the marks; the quoted text is the content between them.
pub fn normalize(text: &str, pairs: &[MatchedPair]) -> String {
    let mut out = String::new();
    let mut open: Vec<usize> = vec![];

    for p in pairs {
        let full = p.full();
        while open.last().is_some_and(|&end| end <= full.start) {
            open.pop();
        }
        let inner = p.inner();
        let _ = writeln!(
            out,
            "{}{} {}..{} {:?}",
            "  ".repeat(open.len()),
            label(p.kind),
            full.start,
            full.end,
            &text[inner.start..inner.end]
        );
        open.push(full.end);
    }

    out
}

fn label(kind: MarkKind) -> &'static str {
    match kind {
        MarkKind::Emphasis => "em",
        MarkKind::Strong => "strong",
        MarkKind::Code => "code",
    }
}
