use std::path::PathBuf;

use crate::kind::ReferenceKind;
use crate::text::{Range, range_of};

/// Language tag attached to every resolved span for highlighting.
pub const MIZAR_LANGUAGE: &str = "Mizar";

/// File a construct was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanOrigin {
    /// The document the hover was requested in.
    Document,
    /// An abstract file under the library root.
    Library(PathBuf),
}

/// Source text of a resolved construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructSpan {
    pub kind: ReferenceKind,
    pub text: String,
    pub language: &'static str,
    /// Where `text` sits inside its source file.
    pub source_range: Range,
    pub origin: SpanOrigin,
}

impl ConstructSpan {
    pub(crate) fn from_source(
        source: &str,
        start: usize,
        end: usize,
        kind: ReferenceKind,
        origin: SpanOrigin,
    ) -> Self {
        Self {
            kind,
            text: source[start..end].to_string(),
            language: MIZAR_LANGUAGE,
            source_range: range_of(source, start, end),
            origin,
        }
    }
}
