#![forbid(unsafe_code)]

//! Reference resolution for Mizar hover.
//!
//! Given a cursor in Mizar source, find the cited token of the justification
//! under it and recover the source text of the construct it cites: a
//! definition block, theorem statement or proof label in the same article,
//! or a definition, theorem or scheme in a library abstract. Everything is
//! pattern based; no syntax tree is ever built.

pub mod anchor;
pub mod citation;
pub mod config;
pub mod error;
pub mod justification;
pub mod kind;
pub mod library;
pub mod local;
pub mod resolve;
pub mod span;
pub mod text;

pub use citation::Citation;
pub use config::MizarConfig;
pub use error::{HoverError, HoverResult};
pub use justification::{CITATION_TOKEN, find_token_at};
pub use kind::ReferenceKind;
pub use library::{LibraryResolver, extract_library_construct};
pub use local::resolve_local;
pub use resolve::{Resolution, resolve_at};
pub use span::{ConstructSpan, MIZAR_LANGUAGE, SpanOrigin};
pub use text::{Position, Range};
