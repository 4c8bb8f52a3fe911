use std::sync::LazyLock;

/// Opaque prefix embedded into each marked source line. Long enough that it
/// cannot collide with real document content. The bootstrap asset strips it
/// from converted output and emits anchor elements in its place, and must
/// therefore agree on the exact value.
pub const MARKER_IDENT: &str = "53bde44bb4f156e94a85723fe633c80b54f11f69";

/// Width of the zero-padded line index appended to the prefix. Indices past
/// 999999 format wider and never match the resolver's fixed-width scan;
/// widening would have to change the reversed prefix handling as well.
pub const LINE_INDEX_WIDTH: usize = 6;

/// Reversed prefix: the id family the anchors carry in the rendered DOM.
pub static REVERSE_IDENT: LazyLock<String> =
    LazyLock::new(|| MARKER_IDENT.chars().rev().collect());

/// Marker token injected into source line `index`.
pub fn marker_token(index: usize) -> String {
    format!("{MARKER_IDENT}{index:0width$}", width = LINE_INDEX_WIDTH)
}

/// Element id the rendered DOM carries for source line `index`.
pub fn anchor_id(index: u32) -> String {
    format!(
        "{}{:0width$}",
        REVERSE_IDENT.as_str(),
        index,
        width = LINE_INDEX_WIDTH
    )
}
