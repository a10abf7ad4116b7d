//! Resolution of citations into library abstracts.
//!
//! A citation `FILE:reference` names the abstract `<root>/abstr/file.abs`.
//! The full citation text occurs exactly once in that file, as the marker
//! comment of the cited construct, so it serves as the key every boundary
//! search starts from.

use std::path::Path;

use tracing::{debug, trace, warn};

use crate::citation::Citation;
use crate::config::{MIZFILES_VAR, MizarConfig};
use crate::error::{HoverError, HoverResult};
use crate::kind::ReferenceKind;
use crate::span::{ConstructSpan, SpanOrigin};
use crate::text::{Range, text_in};

/// Resolves cross-file citations against a library root.
#[derive(Debug, Clone, Default)]
pub struct LibraryResolver {
    config: MizarConfig,
}

impl LibraryResolver {
    pub fn new(config: MizarConfig) -> Self {
        Self { config }
    }

    /// Resolve the library citation at `token_range` in `document`.
    ///
    /// Fails before touching the file system when no root is configured.
    /// Reads the abstract afresh on every call. `Ok(None)` means the token is
    /// not a library citation or does not occur in its abstract.
    pub async fn resolve(
        &self,
        document: &str,
        token_range: Range,
    ) -> HoverResult<Option<ConstructSpan>> {
        let missing = || HoverError::MissingConfiguration { variable: MIZFILES_VAR };
        self.config.mizfiles.as_ref().ok_or_else(missing)?;

        let token = text_in(document, token_range);
        let Citation::Library { file_label, .. } = Citation::parse(token) else {
            return Ok(None);
        };
        let path = self.config.abstract_path(file_label).ok_or_else(missing)?;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "cannot read abstract");
                return Err(HoverError::Io { path, source });
            }
        };

        Ok(extract_library_construct(&path, &text, token))
    }
}

/// Extract the construct cited by `token_text` from `file_text`, the
/// contents of the abstract at `path`. The path only labels the span's origin.
pub fn extract_library_construct(
    path: &Path,
    file_text: &str,
    token_text: &str,
) -> Option<ConstructSpan> {
    let Citation::Library { reference, .. } = Citation::parse(token_text) else {
        return None;
    };
    let Some(key) = file_text.find(token_text) else {
        trace!(token = token_text, path = %path.display(), "citation not present in abstract");
        return None;
    };

    let kind = ReferenceKind::of_library_reference(reference);
    let (start, end) = kind.library_rule()?.extract(file_text, key)?;
    debug!(token = token_text, %kind, start, end, "resolved library reference");
    Some(ConstructSpan::from_source(
        file_text,
        start,
        end,
        kind,
        SpanOrigin::Library(path.to_path_buf()),
    ))
}
