//! Positional addressing over source snapshots.
//!
//! Positions follow the editor protocol: zero-based lines, and characters
//! counted in UTF-16 code units from the start of the line. Everything the
//! resolvers do internally is in byte offsets; this module is the only place
//! the two coordinate systems meet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open span between two positions, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Number of UTF-16 code units needed to encode `s`.
pub fn utf16_len(s: &str) -> u32 {
    s.chars().map(|c| c.len_utf16() as u32).sum()
}

/// Largest char boundary `<= idx`, clamped to the text length.
pub fn floor_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut i = idx;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Byte offset for `pos`.
///
/// A character past the end of its line clamps to the line end, and a line
/// past the end of the text clamps to the text length.
pub fn offset_at(text: &str, pos: Position) -> usize {
    let Some((line_start, line)) = line_at(text, pos.line) else {
        return text.len();
    };
    let body = line.trim_end_matches(['\n', '\r']);

    let mut col: u32 = 0;
    for (i, ch) in body.char_indices() {
        let next = col + ch.len_utf16() as u32;
        if next > pos.character {
            return line_start + i;
        }
        col = next;
    }
    line_start + body.len()
}

pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = floor_char_boundary(text, offset);
    let before = &text[..offset];
    let line = before.matches('\n').count() as u32;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    Position {
        line,
        character: utf16_len(&before[line_start..]),
    }
}

/// Range covering the byte span `start..end`.
pub fn range_of(text: &str, start: usize, end: usize) -> Range {
    Range::new(position_at(text, start), position_at(text, end))
}

/// The line with index `line`, including its terminator, with its byte offset.
pub fn line_at(text: &str, line: u32) -> Option<(usize, &str)> {
    let mut start = 0usize;
    for _ in 0..line {
        let nl = text[start..].find('\n')?;
        start += nl + 1;
    }
    if start > text.len() || (start == text.len() && line > 0 && !text.ends_with('\n')) {
        return None;
    }
    let end = text[start..]
        .find('\n')
        .map(|i| start + i + 1)
        .unwrap_or(text.len());
    Some((start, &text[start..end]))
}

/// The text covered by `range`.
pub fn text_in(text: &str, range: Range) -> &str {
    let start = offset_at(text, range.start);
    let end = offset_at(text, range.end);
    if start >= end {
        return "";
    }
    &text[start..end]
}
