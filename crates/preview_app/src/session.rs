use std::sync::Arc;

use preview_core::{update, Effect, Msg, PreviewViewModel, ViewState};
use preview_engine::{anchor_script, render_document, DocumentKind, PreviewAssets, BOOTSTRAP_CALL};
use preview_logging::preview_debug;
use url::Url;

use crate::surface::{RenderSurface, ScriptRequest};

/// One open preview view: its Render State, the document kind, and the
/// rendering surface it drives.
///
/// Every entry point runs to completion on the caller's thread. Sessions
/// never share mutable state; the only shared data is the read-only
/// [`PreviewAssets`]. Dropping the session is view-close: host events
/// simply stop being delivered, so a surface callback firing after close
/// has no target and is a no-op by construction.
pub struct PreviewSession<S: RenderSurface> {
    state: ViewState,
    kind: DocumentKind,
    base_uri: Url,
    assets: Arc<PreviewAssets>,
    surface: S,
}

impl<S: RenderSurface> PreviewSession<S> {
    pub fn new(assets: Arc<PreviewAssets>, kind: DocumentKind, base_uri: Url, surface: S) -> Self {
        Self {
            state: ViewState::new(),
            kind,
            base_uri,
            assets,
            surface,
        }
    }

    /// Host change notification: the full document text after an edit.
    pub fn document_changed(&mut self, text: &str) {
        self.apply(Msg::DocumentChanged {
            text: text.to_string(),
        });
    }

    /// The surface reported the current load as finished.
    pub fn load_finished(&mut self) {
        self.apply(Msg::LoadFinished);
    }

    /// Host cursor notification, 0-indexed source line.
    pub fn cursor_moved(&mut self, line: u32) {
        self.apply(Msg::CursorMoved { line });
    }

    /// Outcome of an earlier `run_script` call. Failures are logged and
    /// otherwise discarded; the next edit or cursor move retries on its own.
    pub fn script_completed(&mut self, request: ScriptRequest, ok: bool) {
        if !ok {
            preview_debug!("Script evaluation failed for {:?}", request);
        }
        let msg = match request {
            ScriptRequest::Bootstrap => Msg::BootstrapCompleted { ok },
            ScriptRequest::Resolve => Msg::ResolveCompleted { ok },
        };
        self.apply(msg);
    }

    pub fn view(&self) -> PreviewViewModel {
        self.state.view()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn apply(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LoadDocument { text } => {
                let html = match self.kind {
                    DocumentKind::Markdown => render_document(&self.assets, &text),
                    DocumentKind::Html => text,
                };
                self.surface.load_html(&html, &self.base_uri);
            }
            Effect::RunBootstrap => {
                self.surface
                    .run_script(BOOTSTRAP_CALL, ScriptRequest::Bootstrap);
            }
            Effect::ResolveAnchor { line } => {
                self.surface
                    .run_script(&anchor_script(line), ScriptRequest::Resolve);
            }
        }
    }
}
