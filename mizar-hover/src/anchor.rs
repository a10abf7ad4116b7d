//! Nearest-anchor search.
//!
//! Both resolvers find construct boundaries the same way: the nearest
//! keyword at or before some offset, and the first terminator at or after
//! some offset. Neither ever balances blocks.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\send\s*;").expect("block end pattern"));

static STATEMENT_OR_PROOF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\sproof|;").expect("statement end pattern"));

/// Pattern that closes a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Whitespace, `end`, optional whitespace, `;`.
    BlockEnd,
    /// Whitespace followed by `proof`, or a bare `;`.
    StatementOrProof,
    Semicolon,
}

impl Terminator {
    /// Offset of the first match starting at or after `from`.
    pub fn first_from(self, text: &str, from: usize) -> Option<usize> {
        if from > text.len() || !text.is_char_boundary(from) {
            return None;
        }
        let rest = &text[from..];
        let rel = match self {
            Terminator::BlockEnd => BLOCK_END.find(rest).map(|m| m.start()),
            Terminator::StatementOrProof => STATEMENT_OR_PROOF.find(rest).map(|m| m.start()),
            Terminator::Semicolon => rest.find(';'),
        }?;
        Some(from + rel)
    }
}

/// Offset of the last occurrence of `needle` that starts at or before `at`.
///
/// The occurrence may extend past `at`.
pub fn nearest_before(text: &str, at: usize, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(at.min(text.len()));
    }
    let limit = crate::text::floor_char_boundary(text, at.saturating_add(needle.len()));
    text[..limit].rfind(needle)
}
