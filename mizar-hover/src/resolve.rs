use crate::citation::Citation;
use crate::error::HoverResult;
use crate::justification::{CITATION_TOKEN, find_token_at};
use crate::library::LibraryResolver;
use crate::local::resolve_local;
use crate::span::ConstructSpan;
use crate::text::{Position, Range, text_in};

/// A resolved citation together with the token that cited it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub token_range: Range,
    pub span: ConstructSpan,
}

/// Tokenize at `position` and route the cited token to the local or the
/// library resolver.
pub async fn resolve_at(
    document: &str,
    position: Position,
    library: &LibraryResolver,
) -> HoverResult<Option<Resolution>> {
    let Some(token_range) = find_token_at(document, position, &CITATION_TOKEN) else {
        return Ok(None);
    };

    let span = match Citation::parse(text_in(document, token_range)) {
        Citation::Local(_) => resolve_local(document, token_range),
        Citation::Library { .. } => library.resolve(document, token_range).await?,
    };
    Ok(span.map(|span| Resolution { token_range, span }))
}
