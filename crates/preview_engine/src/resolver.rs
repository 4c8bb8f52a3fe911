use crate::markers::{anchor_id, LINE_INDEX_WIDTH, REVERSE_IDENT};

/// Script invoking the client-side conversion entry point. Run exactly once
/// per completed load.
pub const BOOTSTRAP_CALL: &str = "preview();";

/// Script that scrolls the rendered view to the nearest anchor at or before
/// `line`.
///
/// DOM presence is the source of truth: some lines never received a marker
/// and the converter may drop others, so the scan has to happen inside the
/// rendering surface. Semantics mirror [`nearest_anchor_at_or_before`].
pub fn anchor_script(line: u32) -> String {
    format!(
        r#"var id;
var line = ({line} > 0) ? {line} : 0;

for (; line >= 0; --line) {{
  id = "{rid}" + ("{zeros}" + line).slice(-{width});
  if (document.getElementById(id)) {{
    break;
  }}
}}

location.hash = id;
"#,
        rid = REVERSE_IDENT.as_str(),
        zeros = "0".repeat(LINE_INDEX_WIDTH),
        width = LINE_INDEX_WIDTH,
    )
}

/// Canonical form of the scan the generated script performs: linear
/// backward search from `line`, first realized anchor wins, and line 0's id
/// is the fallback whether or not it exists (navigating to a missing id is
/// a benign no-op).
pub fn nearest_anchor_at_or_before(line: u32, is_present: impl Fn(u32) -> bool) -> String {
    let mut candidate = line;
    loop {
        if is_present(candidate) || candidate == 0 {
            return anchor_id(candidate);
        }
        candidate -= 1;
    }
}
