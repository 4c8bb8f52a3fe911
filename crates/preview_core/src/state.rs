use crate::view_model::PreviewViewModel;

/// Load lifecycle of the rendering surface for the current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Content handed to the surface but the load has not completed yet
    /// (or no content loaded at all).
    #[default]
    Unloaded,
    /// Load completed and the bootstrap has been triggered.
    Loaded,
}

/// Render State for one open preview view.
///
/// Created when the view opens, reset to `Unloaded` on every content load,
/// dropped when the view closes. Views never share state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    phase: LoadPhase,
    changed_since_load: bool,
    last_line: Option<u32>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether new content arrived after the last anchor resolve, meaning
    /// the scroll position must be restored even if the cursor line is
    /// unchanged.
    pub fn changed_since_load(&self) -> bool {
        self.changed_since_load
    }

    /// Most recent cursor line reported by the host, or `None` before the
    /// first cursor notification.
    pub fn last_line(&self) -> Option<u32> {
        self.last_line
    }

    pub fn view(&self) -> PreviewViewModel {
        PreviewViewModel {
            loaded: self.phase == LoadPhase::Loaded,
            pending_refresh: self.changed_since_load,
            last_line: self.last_line,
        }
    }

    pub(crate) fn begin_load(&mut self) {
        self.phase = LoadPhase::Unloaded;
        self.changed_since_load = true;
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.phase = LoadPhase::Loaded;
    }

    pub(crate) fn record_cursor(&mut self, line: u32) {
        self.last_line = Some(line);
    }

    pub(crate) fn clear_pending_refresh(&mut self) {
        self.changed_since_load = false;
    }
}
