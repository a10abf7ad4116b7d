//! Resolution of citations into the hovered document itself.

use tracing::{debug, trace};

use crate::anchor::nearest_before;
use crate::kind::ReferenceKind;
use crate::span::{ConstructSpan, SpanOrigin};
use crate::text::{Range, offset_at, text_in};

/// Resolve the token at `token_range` to the definition, theorem or label it
/// cites in `document`.
///
/// Definitions win over theorems, and theorems over labels. Returns `None`
/// when the token cites nothing recognisable.
pub fn resolve_local(document: &str, token_range: Range) -> Option<ConstructSpan> {
    let word = text_in(document, token_range);
    if word.is_empty() {
        return None;
    }
    let token_start = offset_at(document, token_range.start);

    let Some((kind, key)) = locate(document, word, token_start) else {
        trace!(word, "no local construct");
        return None;
    };
    let (start, end) = kind.local_rule()?.extract(document, key)?;
    debug!(word, %kind, start, end, "resolved local reference");
    Some(ConstructSpan::from_source(
        document,
        start,
        end,
        kind,
        SpanOrigin::Document,
    ))
}

/// Kind of the first pattern `word` satisfies, with the offset of its key.
fn locate(document: &str, word: &str, token_start: usize) -> Option<(ReferenceKind, usize)> {
    if let Some(key) = document.find(&format!(":{word}:")) {
        return Some((ReferenceKind::Definition, key));
    }
    if let Some(key) = document.find(&format!("theorem {word}:")) {
        return Some((ReferenceKind::Theorem, key));
    }
    // Nearest declaration strictly before the citation.
    nearest_before(document, token_start.saturating_sub(1), &format!("{word}:"))
        .map(|key| (ReferenceKind::Label, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::range_of;

    const ARTICLE: &str = "\
definition
  let X be set;
  func succ X -> set equals
  :Def1:
    X \\/ {X};
  coherence;
end;

theorem Th1:
  for X being set holds X in succ X
proof
  let X be set;
  A1: X in {X} by TARSKI:def 1;
  thus thesis by A1, Def1, XBOOLE_0:7;
end;

theorem Th2: succ {} = {{}} by Th1;
";

    fn range_after(doc: &str, prefix: &str, word: &str) -> Range {
        let at = doc.find(prefix).expect("prefix present") + prefix.len();
        assert_eq!(&doc[at..at + word.len()], word);
        range_of(doc, at, at + word.len())
    }

    #[test]
    fn definition_spans_whole_block() {
        let span = resolve_local(ARTICLE, range_after(ARTICLE, "A1, ", "Def1")).unwrap();
        assert_eq!(span.kind, ReferenceKind::Definition);
        assert!(span.text.starts_with("definition\n  let X be set;"));
        assert!(span.text.ends_with("coherence;\nend;"));
        assert_eq!(span.language, "Mizar");
        assert_eq!(span.origin, SpanOrigin::Document);
    }

    #[test]
    fn theorem_with_proof_stops_before_proof() {
        let span = resolve_local(ARTICLE, range_after(ARTICLE, "{{}} by ", "Th1")).unwrap();
        assert_eq!(span.kind, ReferenceKind::Theorem);
        assert_eq!(span.text, "theorem Th1:\n  for X being set holds X in succ X\n");
    }

    #[test]
    fn theorem_without_proof_ends_at_semicolon() {
        let doc = "theorem Th2: succ {} = {{}};\nthen x by Th2;\n";
        let span = resolve_local(doc, range_after(doc, "by ", "Th2")).unwrap();
        assert_eq!(span.kind, ReferenceKind::Theorem);
        assert_eq!(span.text, "theorem Th2: succ {} = {{}};");
    }

    #[test]
    fn label_resolves_to_preceding_declaration() {
        let span = resolve_local(ARTICLE, range_after(ARTICLE, "thesis by ", "A1")).unwrap();
        assert_eq!(span.kind, ReferenceKind::Label);
        assert_eq!(span.text, "A1: X in {X} by TARSKI:def 1;");
        let start = ARTICLE.find("A1:").unwrap();
        assert_eq!(span.source_range, range_of(ARTICLE, start, start + span.text.len()));
    }

    #[test]
    fn nearest_of_repeated_labels_wins() {
        let doc = "A1: x = 1;\nthen y by A1;\nA1: x = 2;\nthen z by A1;\n";
        let first = doc.find("by A1").unwrap() + 3;
        let second = doc.rfind("by A1").unwrap() + 3;
        let span = resolve_local(doc, range_of(doc, first, first + 2)).unwrap();
        assert_eq!(span.text, "A1: x = 1;");
        let span = resolve_local(doc, range_of(doc, second, second + 2)).unwrap();
        assert_eq!(span.text, "A1: x = 2;");
    }

    #[test]
    fn label_declared_after_citation_is_not_found() {
        let doc = "then y by A7;\nA7: x = 1;\n";
        assert_eq!(resolve_local(doc, range_after(doc, "by ", "A7")), None);
    }

    #[test]
    fn definition_key_outranks_label() {
        let doc = "definition\n  func f -> set equals :D1: {};\n  coherence;\nend;\nD1: x = x;\nthen y by D1;\n";
        let span = resolve_local(doc, range_after(doc, "by ", "D1")).unwrap();
        assert_eq!(span.kind, ReferenceKind::Definition);
        assert!(span.text.ends_with("\nend;"));
    }

    #[test]
    fn unknown_token_is_empty() {
        let doc = "then x by Foo;\n";
        assert_eq!(resolve_local(doc, range_after(doc, "by ", "Foo")), None);
    }

    #[test]
    fn empty_range_is_empty() {
        assert_eq!(resolve_local(ARTICLE, Range::default()), None);
    }

    #[test]
    fn definition_without_keyword_degrades_to_nothing() {
        let doc = "func f -> set equals :D9: {};\nthen by D9;\n";
        assert_eq!(resolve_local(doc, range_after(doc, "by ", "D9")), None);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let range = range_after(ARTICLE, "A1, ", "Def1");
        assert_eq!(resolve_local(ARTICLE, range), resolve_local(ARTICLE, range));
    }
}
