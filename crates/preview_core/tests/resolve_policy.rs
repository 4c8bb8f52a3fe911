use std::sync::Once;

use preview_core::{update, Effect, Msg, ViewState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(preview_logging::initialize_for_tests);
}

/// Drive a fresh view to the Loaded phase with the cursor on `line`.
fn loaded_at(line: u32) -> ViewState {
    let state = ViewState::new();
    let (state, _) = update(
        state,
        Msg::DocumentChanged {
            text: "body".to_string(),
        },
    );
    let (state, _) = update(state, Msg::CursorMoved { line });
    let (state, _) = update(state, Msg::LoadFinished);
    let (state, _) = update(state, Msg::BootstrapCompleted { ok: true });
    state
}

#[test]
fn cursor_move_to_new_line_resolves() {
    init_logging();
    let state = loaded_at(4);

    let (state, effects) = update(state, Msg::CursorMoved { line: 9 });

    assert_eq!(effects, vec![Effect::ResolveAnchor { line: 9 }]);
    assert_eq!(state.view().last_line, Some(9));
}

#[test]
fn cursor_move_to_same_line_is_a_noop() {
    init_logging();
    let state = loaded_at(4);

    let (_state, effects) = update(state, Msg::CursorMoved { line: 4 });

    assert!(effects.is_empty());
}

#[test]
fn same_line_resolves_again_right_after_a_reload() {
    init_logging();
    let state = loaded_at(4);

    // New content arrives; the rendered document is rebuilt from scratch,
    // so the scroll position must be restored once even though the cursor
    // has not moved.
    let (state, _) = update(
        state,
        Msg::DocumentChanged {
            text: "body v2".to_string(),
        },
    );
    let (state, _) = update(state, Msg::LoadFinished);
    let (state, effects) = update(state, Msg::BootstrapCompleted { ok: true });
    assert_eq!(effects, vec![Effect::ResolveAnchor { line: 4 }]);

    // Once restored, an unchanged cursor stays quiet again.
    let (_state, effects) = update(state, Msg::CursorMoved { line: 4 });
    assert!(effects.is_empty());
}

#[test]
fn resolve_result_is_discarded_either_way() {
    init_logging();
    let state = loaded_at(4);

    let (state, effects) = update(state, Msg::ResolveCompleted { ok: true });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::ResolveCompleted { ok: false });
    assert!(effects.is_empty());

    // A failed resolve does not disturb the recorded line.
    assert_eq!(state.view().last_line, Some(4));
}
