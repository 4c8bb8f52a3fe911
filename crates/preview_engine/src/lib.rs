//! Preview engine: marker injection, preview document assembly, and
//! resolver script generation.
mod assets;
mod document;
mod escape;
mod inject;
mod markers;
mod resolver;

pub use assets::{AssetError, PreviewAssets};
pub use document::{render_document, DocumentKind};
pub use escape::script_string_literal;
pub use inject::marked_source;
pub use markers::{anchor_id, marker_token, LINE_INDEX_WIDTH, MARKER_IDENT, REVERSE_IDENT};
pub use resolver::{anchor_script, nearest_anchor_at_or_before, BOOTSTRAP_CALL};
