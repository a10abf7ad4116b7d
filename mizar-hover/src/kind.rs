//! Reference kinds and the boundary rule each one is extracted with.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::anchor::{Terminator, nearest_before};
use crate::text::floor_char_boundary;

static DEFINITION_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)def\s+\d+").expect("definition reference pattern"));

static SCHEME_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)sch\s+\d+").expect("scheme reference pattern"));

/// What a hovered token denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Definition,
    Theorem,
    Label,
    Scheme,
}

impl ReferenceKind {
    /// Classify the part of a library citation after the file label,
    /// e.g. `def 1`, `sch 2` or `12`.
    pub fn of_library_reference(reference: &str) -> Self {
        if DEFINITION_REF.is_match(reference) {
            ReferenceKind::Definition
        } else if SCHEME_REF.is_match(reference) {
            ReferenceKind::Scheme
        } else {
            ReferenceKind::Theorem
        }
    }

    /// Rule for constructs inside the hovered document. Schemes are only
    /// resolved through the library.
    pub fn local_rule(self) -> Option<ExtractionRule> {
        match self {
            ReferenceKind::Definition => Some(ExtractionRule {
                start: StartAnchor::Keyword("definition"),
                origin: Origin::Start,
                end: Terminator::BlockEnd,
                extend: "\nend;".len(),
            }),
            ReferenceKind::Theorem => Some(ExtractionRule {
                start: StartAnchor::AtKey,
                origin: Origin::Start,
                end: Terminator::StatementOrProof,
                extend: "\n".len(),
            }),
            ReferenceKind::Label => Some(ExtractionRule {
                start: StartAnchor::AtKey,
                origin: Origin::Start,
                end: Terminator::Semicolon,
                extend: ";".len(),
            }),
            ReferenceKind::Scheme => None,
        }
    }

    /// Rule for constructs inside an abstract file. Labels never cross files.
    pub fn library_rule(self) -> Option<ExtractionRule> {
        match self {
            ReferenceKind::Definition => Some(ExtractionRule {
                start: StartAnchor::Keyword("definition"),
                origin: Origin::Key,
                end: Terminator::BlockEnd,
                extend: "\nend;".len(),
            }),
            ReferenceKind::Scheme => Some(ExtractionRule {
                start: StartAnchor::Keyword("scheme"),
                origin: Origin::Key,
                end: Terminator::Semicolon,
                extend: 0,
            }),
            ReferenceKind::Theorem => Some(ExtractionRule {
                start: StartAnchor::Keyword("theorem"),
                origin: Origin::Key,
                end: Terminator::Semicolon,
                extend: ";".len(),
            }),
            ReferenceKind::Label => None,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceKind::Definition => "definition",
            ReferenceKind::Theorem => "theorem",
            ReferenceKind::Label => "label",
            ReferenceKind::Scheme => "scheme",
        })
    }
}

/// Where a construct starts relative to the key that identified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAnchor {
    /// The key match itself opens the construct.
    AtKey,
    /// Nearest occurrence of the keyword at or before the key.
    Keyword(&'static str),
}

/// Offset the terminator search begins from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Start,
    Key,
}

/// A start anchor paired with an end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    pub start: StartAnchor,
    pub origin: Origin,
    pub end: Terminator,
    /// Bytes kept past the start of the terminator match.
    pub extend: usize,
}

impl ExtractionRule {
    /// Byte span of the construct identified by the match at `key`.
    ///
    /// Returns `None` when an anchor is missing or the span would be empty.
    pub fn extract(&self, text: &str, key: usize) -> Option<(usize, usize)> {
        let start = match self.start {
            StartAnchor::AtKey => key,
            StartAnchor::Keyword(keyword) => nearest_before(text, key, keyword)?,
        };
        let from = match self.origin {
            Origin::Start => start,
            Origin::Key => key,
        };
        let end = self.end.first_from(text, from)?.saturating_add(self.extend);
        let end = floor_char_boundary(text, end);
        (start < end).then_some((start, end))
    }
}
