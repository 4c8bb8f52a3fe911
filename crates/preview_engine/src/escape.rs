/// Escape marked source text for embedding as a double-quoted script
/// string literal: quotes gain a backslash and real newlines become the
/// two-character `\n` sequence.
pub fn script_string_literal(text: &str) -> String {
    text.replace('"', "\\\"").replace('\n', "\\n")
}
