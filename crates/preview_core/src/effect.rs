#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the current document text to the rendering surface. The runner
    /// applies the Markdown transform (or passes HTML through) before the
    /// actual load.
    LoadDocument { text: String },
    /// Run the client-side conversion entry point once for this load.
    RunBootstrap,
    /// Scroll the rendered view to the nearest marker at or before `line`.
    ResolveAnchor { line: u32 },
}
