use crate::{Effect, LoadPhase, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
///
/// All three external triggers (document change, load completion, cursor
/// movement) flow through here; the effect runner owns the side effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentChanged { text } => {
            // Every edit reloads the surface from scratch. The load-once
            // guard re-arms so the next LoadFinished runs the bootstrap.
            state.begin_load();
            vec![Effect::LoadDocument { text }]
        }
        Msg::LoadFinished => match state.phase() {
            LoadPhase::Unloaded => {
                state.mark_loaded();
                vec![Effect::RunBootstrap]
            }
            // The surface may signal "finished" more than once per load.
            LoadPhase::Loaded => Vec::new(),
        },
        Msg::BootstrapCompleted { ok } => {
            if ok && state.phase() == LoadPhase::Loaded {
                resolve_last_known(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::CursorMoved { line } => {
            let moved = state.last_line() != Some(line);
            state.record_cursor(line);
            if state.phase() == LoadPhase::Loaded && (moved || state.changed_since_load()) {
                state.clear_pending_refresh();
                vec![Effect::ResolveAnchor { line }]
            } else {
                Vec::new()
            }
        }
        // Script results carry nothing we act on; the next edit or cursor
        // move retries independently.
        Msg::ResolveCompleted { ok: _ } => Vec::new(),
    };

    (state, effects)
}

/// Re-resolve the last known cursor position so a fresh load scrolls back
/// to where the cursor already is instead of jumping to the top.
fn resolve_last_known(state: &mut ViewState) -> Vec<Effect> {
    match state.last_line() {
        Some(line) => {
            state.clear_pending_refresh();
            vec![Effect::ResolveAnchor { line }]
        }
        None => Vec::new(),
    }
}
