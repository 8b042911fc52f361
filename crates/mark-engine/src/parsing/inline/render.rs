use super::types::{MatchedPair, Tokenized};

/// One splice into the paragraph text.
#[derive(Debug, Clone, Copy)]
struct Splice {
    at: usize,
    /// Bytes of source replaced by `insert`.
    skip: usize,
    insert: &'static str,
}

/// Produces the tagged string for one paragraph.
///
/// Mark characters of accepted pairs are replaced by their tags, escaping
/// backslashes are dropped, and every other byte is copied verbatim.
/// Unmatched marks are simply not spliced, so they stay literal.
pub fn render(text: &str, tokenized: &Tokenized, pairs: &[MatchedPair]) -> String {
    let mut splices: Vec<Splice> = Vec::with_capacity(pairs.len() * 2 + tokenized.escapes.len());
    for pair in pairs {
        splices.push(Splice {
            at: pair.open.start,
            skip: pair.open.len(),
            insert: pair.kind.open_tag(),
        });
        splices.push(Splice {
            at: pair.close.start,
            skip: pair.close.len(),
            insert: pair.kind.close_tag(),
        });
    }
    splices.extend(tokenized.escapes.iter().map(|&at| Splice {
        at,
        skip: 1,
        insert: "",
    }));
    // Splices never overlap, so ordering by position is enough
    splices.sort_by_key(|s| s.at);

    let extra: usize = splices.iter().map(|s| s.insert.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut copied = 0;
    for splice in splices {
        out.push_str(&text[copied..splice.at]);
        out.push_str(splice.insert);
        copied = splice.at + splice.skip;
    }
    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{inline::kinds::MarkKind, span::Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_splices_copies_text() {
        assert_eq!(render("a_b `c", &Tokenized::default(), &[]), "a_b `c");
    }

    #[test]
    fn pair_marks_are_replaced_not_duplicated() {
        let pairs = [MatchedPair::new(
            MarkKind::Strong,
            Span::new(2, 4),
            Span::new(5, 7),
        )];
        assert_eq!(
            render("a __b__ c", &Tokenized::default(), &pairs),
            "a <strong>b</strong> c"
        );
    }

    #[test]
    fn escapes_drop_only_the_backslash() {
        let tokenized = Tokenized {
            tokens: vec![],
            escapes: vec![0, 3],
        };
        assert_eq!(render(r"\_x\_", &tokenized, &[]), "_x_");
    }

    #[test]
    fn nested_and_adjacent_splices() {
        // An escaped backtick directly followed by a code span
        let text = r"\``_x_`";
        let tokenized = Tokenized {
            tokens: vec![],
            escapes: vec![0],
        };
        let pairs = [MatchedPair::new(
            MarkKind::Code,
            Span::new(2, 3),
            Span::new(6, 7),
        )];
        assert_eq!(render(text, &tokenized, &pairs), "`<code>_x_</code>");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let pairs = [MatchedPair::new(
            MarkKind::Emphasis,
            Span::new(0, 1),
            Span::new(7, 8),
        )];
        assert_eq!(
            render("_héllo_", &Tokenized::default(), &pairs),
            "<em>héllo</em>"
        );
    }
}
