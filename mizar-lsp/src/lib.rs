#![forbid(unsafe_code)]

//! Language server exposing Mizar citation hovers and go-to-definition.

use std::collections::HashMap;

use mizar_hover::{
    HoverError, LibraryResolver, MizarConfig, Resolution, SpanOrigin, resolve_at,
};
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

pub struct Backend {
    client: Client,
    docs: RwLock<HashMap<Url, String>>,
    /// Used when the client's initialization options name no root.
    fallback: MizarConfig,
    library: RwLock<LibraryResolver>,
}

impl Backend {
    /// Backend whose library root defaults to `MIZFILES`.
    pub fn new(client: Client) -> Self {
        Self::with_config(client, MizarConfig::from_env())
    }

    pub fn with_config(client: Client, fallback: MizarConfig) -> Self {
        Self {
            client,
            docs: RwLock::new(HashMap::new()),
            library: RwLock::new(LibraryResolver::new(fallback.clone())),
            fallback,
        }
    }

    /// Open document text, or the file behind `uri` for documents the client
    /// never opened.
    async fn text_for(&self, uri: &Url) -> Option<String> {
        if let Some(text) = self.docs.read().await.get(uri).cloned() {
            return Some(text);
        }
        let path = uri.to_file_path().ok()?;
        tokio::fs::read_to_string(path).await.ok()
    }

    async fn resolve(&self, uri: &Url, pos: Position) -> Option<Resolution> {
        let text = self.text_for(uri).await?;
        let library = self.library.read().await.clone();

        match resolve_at(&text, core_position(pos), &library).await {
            Ok(res) => res,
            Err(err) => {
                self.report(&err).await;
                None
            }
        }
    }

    async fn report(&self, err: &HoverError) {
        warn!(error = %err, "citation resolution failed");
        let severity = match err {
            HoverError::MissingConfiguration { .. } => MessageType::ERROR,
            HoverError::Io { .. } => MessageType::WARNING,
        };
        self.client.show_message(severity, err.to_string()).await;
    }
}

fn core_position(pos: Position) -> mizar_hover::Position {
    mizar_hover::Position::new(pos.line, pos.character)
}

fn lsp_range(range: mizar_hover::Range) -> Range {
    Range {
        start: Position::new(range.start.line, range.start.character),
        end: Position::new(range.end.line, range.end.character),
    }
}

fn hover_from(res: Resolution) -> Hover {
    Hover {
        contents: HoverContents::Array(vec![MarkedString::LanguageString(LanguageString {
            language: res.span.language.to_string(),
            value: res.span.text,
        })]),
        range: Some(lsp_range(res.token_range)),
    }
}

fn location_from(uri: &Url, res: &Resolution) -> Option<Location> {
    let target = match &res.span.origin {
        SpanOrigin::Document => uri.clone(),
        SpanOrigin::Library(path) => Url::from_file_path(path).ok()?,
    };
    Some(Location::new(target, lsp_range(res.span.source_range)))
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let config = MizarConfig::from_options(params.initialization_options.as_ref())
            .unwrap_or_else(|| self.fallback.clone());
        match config.mizfiles.as_deref() {
            Some(root) => info!(root = %root.display(), "library root configured"),
            None => warn!("no library root configured; library citations will not resolve"),
        }
        *self.library.write().await = LibraryResolver::new(config);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: "mizar-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Mizar LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        debug!(uri = %doc.uri, "opened");
        self.docs.write().await.insert(doc.uri, doc.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(change) = params.content_changes.into_iter().last() {
            self.docs.write().await.insert(uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.docs.write().await.remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let pos = params.text_document_position_params;
        Ok(self
            .resolve(&pos.text_document.uri, pos.position)
            .await
            .map(hover_from))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let pos = params.text_document_position_params;
        let uri = pos.text_document.uri;
        Ok(self
            .resolve(&uri, pos.position)
            .await
            .and_then(|res| location_from(&uri, &res))
            .map(GotoDefinitionResponse::Scalar))
    }
}
