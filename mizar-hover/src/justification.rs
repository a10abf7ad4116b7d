//! Locating the cited token under the cursor.
//!
//! Only tokens inside a justification clause are hoverable: the `by ...`
//! tail of a proof step, or a scheme application `from S(...)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{Position, Range, line_at, utf16_len};

static JUSTIFICATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)by\s+([[:word:]]+(,|\s|:)*)+|from\s+[[:word:]]+(:sch\s+\d+)*\(([[:word:]]+,*)+\)",
    )
    .expect("justification clause pattern")
});

/// Tokens a justification can cite: library definitions, theorems and
/// schemes (`FILE:def 1`, `FILE:12`, `FILE:sch 2`) or plain names.
pub static CITATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)[[:word:]]+:def\s+\d+|[[:word:]]+:\s*\d+|[[:word:]]+:sch\s+\d+|[[:word:]]+",
    )
    .expect("citation token pattern")
});

/// Range of the `token_pattern` match under `position`, if the line holds a
/// justification clause.
///
/// Matches are scanned left to right inside the first clause on the line;
/// the first whose end lies past the cursor is returned.
pub fn find_token_at(document: &str, position: Position, token_pattern: &Regex) -> Option<Range> {
    let (_, line) = line_at(document, position.line)?;
    let clause = JUSTIFICATION.find(line)?;
    let clause_col = utf16_len(&line[..clause.start()]);
    let clause_text = clause.as_str();

    token_pattern.find_iter(clause_text).find_map(|m| {
        let end = clause_col + utf16_len(&clause_text[..m.end()]);
        if position.character < end {
            let start = clause_col + utf16_len(&clause_text[..m.start()]);
            Some(Range::new(
                Position::new(position.line, start),
                Position::new(position.line, end),
            ))
        } else {
            None
        }
    })
}
