#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Full document text after an edit (host change notification).
    DocumentChanged { text: String },
    /// The rendering surface finished loading the current HTML document.
    LoadFinished,
    /// The bootstrap script completed; `ok` is false if it threw.
    BootstrapCompleted { ok: bool },
    /// Cursor moved to a 0-indexed source line.
    CursorMoved { line: u32 },
    /// An anchor-resolve script completed; the result is discarded.
    ResolveCompleted { ok: bool },
}
