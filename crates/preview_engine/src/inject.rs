use std::sync::LazyLock;

use regex::Regex;

use crate::markers::marker_token;

// An HTML tag anywhere in the line. The token goes after the first tag,
// never before it, so it cannot land inside attribute text.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.+?>").unwrap());

// Link-reference definitions are pure Markdown metadata; a token would turn
// them into visible content.
static LINK_REF_DEF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[.+?\]:").unwrap());

// A table data row: leading pipe not followed by a separator run. Header
// separator rows (`|---|:--:|`) must stay untouched.
static TABLE_ROW: LazyLock<fancy_regex::Regex> =
    LazyLock::new(|| fancy_regex::Regex::new(r"^\|(?![ \t]*[-:])(.+)").unwrap());

// First junction between two word characters (Latin letters, digits, or
// common CJK). Inserting there keeps the token clear of the structural
// punctuation (`#`, `*`, `-`, ...) Markdown interprets at line start.
static WORD_JUNCTION: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"(?<=[a-zA-Z\d\x{4e00}-\x{9fa5}])\B(?=[a-zA-Z\d\x{4e00}-\x{9fa5}])")
        .unwrap()
});

/// Inject one invisible marker token per non-empty source line.
///
/// Pure and deterministic. Line count is preserved: empty lines become a
/// single space instead of receiving a token. Must only ever run on fresh,
/// unmarked source; re-applying it to its own output would double-insert.
pub fn marked_source(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| mark_line(line, index))
        .collect::<Vec<_>>()
        .join("\n")
}

fn mark_line(line: &str, index: usize) -> String {
    if line.is_empty() {
        return " ".to_string();
    }

    let token = marker_token(index);
    // Priority order is deliberate and load-bearing: a table row containing
    // a raw tag is classified as tagged, not as a table row.
    let marked = if let Some(m) = HTML_TAG.find(line) {
        format!("{} {}{}", &line[..m.end()], token, &line[m.end()..])
    } else if LINK_REF_DEF.is_match(line) {
        line.to_string()
    } else if let Some(rest) = table_row_rest(line) {
        format!("|{token}{rest}")
    } else if let Some(at) = first_word_junction(line) {
        format!("{}{}{}", &line[..at], token, &line[at..])
    } else {
        // No word run to hide the token in (e.g. pure punctuation).
        line.to_string()
    };

    escape_backslash_sequences(&marked)
}

fn table_row_rest(line: &str) -> Option<&str> {
    TABLE_ROW
        .captures(line)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn first_word_junction(line: &str) -> Option<usize> {
    WORD_JUNCTION.find(line).ok().flatten().map(|m| m.start())
}

/// Double backslash-letter escapes literally present in the source text so
/// they survive the trip through a double-quoted script string. These are
/// two-character sequences in the source, not real control characters.
fn escape_backslash_sequences(line: &str) -> String {
    line.replace("\\n", "\\\\n")
        .replace("\\r", "\\\\r")
        .replace("\\t", "\\\\t")
}
