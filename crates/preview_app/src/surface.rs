use url::Url;

/// Which generated script a completion event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRequest {
    /// The one-shot conversion entry point run after a load completes.
    Bootstrap,
    /// An anchor-resolve scroll request.
    Resolve,
}

/// The two operations the preview consumes from the host's rendering
/// surface (a browser-engine view in practice).
///
/// Both are fire-and-forget from the caller's side. The host reports load
/// completion through `PreviewSession::load_finished` and script outcomes
/// through `PreviewSession::script_completed`; the state machine's gating
/// flags ensure no request is re-issued before its completion arrives.
pub trait RenderSurface {
    /// Replace the surface content with `html`, resolving relative
    /// references against `base_uri`.
    fn load_html(&mut self, html: &str, base_uri: &Url);

    /// Start evaluating `script` in the rendered document.
    fn run_script(&mut self, script: &str, request: ScriptRequest);
}
