#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewViewModel {
    pub loaded: bool,
    pub pending_refresh: bool,
    pub last_line: Option<u32>,
}

/// Title for the preview tab next to the document it mirrors.
pub fn preview_title(document_title: &str) -> String {
    format!("{document_title} (Preview)")
}
