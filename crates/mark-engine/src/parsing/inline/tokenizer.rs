use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Escape, MarkKind, Underscore},
    types::{MarkRole, MarkToken, Tokenized},
};

/// Scans paragraph text for candidate marks.
///
/// Every backtick becomes a `Code` token. Underscore runs of length one or
/// two become `Emphasis`/`Strong` tokens when they sit on a mark boundary;
/// runs inside words and runs of three or more are left as text. A
/// backslash directly before a mark suppresses it and is recorded in
/// [`Tokenized::escapes`] so the renderer can drop it.
pub fn tokenize(s: &str) -> Tokenized {
    let mut cur = Cursor::new(s);
    let mut out = Tokenized::default();

    while !cur.eof() {
        match cur.peek() {
            Some(Escape::BACKSLASH) => scan_escape(&mut cur, &mut out),
            Some(CodeSpan::TICK) => {
                out.tokens
                    .push(MarkToken::new(MarkKind::Code, MarkRole::Either, cur.pos()));
                cur.bump();
            }
            Some(Underscore::MARK) => scan_underscores(&mut cur, &mut out.tokens),
            _ => {
                cur.bump();
            }
        }
    }

    out
}

/// Handles a backslash at the cursor.
///
/// An escaped underscore run is consumed whole, so `\__` stays a literal
/// `__` rather than leaving the second underscore to be classified.
fn scan_escape(cur: &mut Cursor<'_>, out: &mut Tokenized) {
    let at = cur.pos();
    match cur.peek_next() {
        Some(CodeSpan::TICK) => {
            out.escapes.push(at);
            cur.bump_n(2);
        }
        Some(Underscore::MARK) => {
            out.escapes.push(at);
            cur.bump();
            cur.eat_run(Underscore::MARK);
        }
        // Not escaping anything (or trailing): a literal backslash
        _ => {
            cur.bump();
        }
    }
}

fn scan_underscores(cur: &mut Cursor<'_>, tokens: &mut Vec<MarkToken>) {
    let start = cur.pos();
    let len = cur.eat_run(Underscore::MARK);
    let Some(kind) = MarkKind::from_underscore_run(len) else {
        return;
    };

    let before = cur.char_before(start);
    let after = cur.char_at(cur.pos());
    if let Some(role) = classify(before, after) {
        tokens.push(MarkToken::new(kind, role, start));
    }
}

/// Decides the role of an underscore run from its neighbours.
///
/// Runs are maximal, so neither neighbour is itself an underscore.
fn classify(before: Option<char>, after: Option<char>) -> Option<MarkRole> {
    let word_before = before.is_some_and(Underscore::is_word_char);
    let word_after = after.is_some_and(Underscore::is_word_char);

    if !word_before && after.is_some_and(|c| !c.is_whitespace()) {
        Some(MarkRole::Opening)
    } else if word_before && !word_after {
        Some(MarkRole::Closing)
    } else {
        None
    }
}
