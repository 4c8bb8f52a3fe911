use preview_engine::{marked_source, marker_token, MARKER_IDENT};
use pretty_assertions::assert_eq;

#[test]
fn line_count_is_preserved() {
    let input = "# Title\n\nSome text.\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
    let output = marked_source(input);
    assert_eq!(output.split('\n').count(), input.split('\n').count());
}

#[test]
fn empty_lines_become_a_single_space() {
    let output = marked_source("first\n\nthird");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines[1], " ");
    assert!(!lines[1].contains(MARKER_IDENT));
}

#[test]
fn link_reference_definitions_are_left_untouched() {
    let line = "[foo]: http://example.com";
    let output = marked_source(line);
    assert_eq!(output, line);
}

#[test]
fn table_separator_rows_are_never_marked() {
    let output = marked_source("|---|---|");
    assert_eq!(output, "|---|---|");

    let aligned = marked_source("| :--- | ---: |");
    assert!(!aligned.contains(MARKER_IDENT));
}

#[test]
fn table_data_rows_get_the_token_after_the_leading_pipe() {
    let output = marked_source("|a|b|");
    assert_eq!(output, format!("|{}a|b|", marker_token(0)));
}

#[test]
fn tagged_lines_get_the_token_after_the_first_tag() {
    let output = marked_source("<div>hello</div>");
    assert_eq!(output, format!("<div> {}hello</div>", marker_token(0)));
}

#[test]
fn plain_text_gets_the_token_at_the_first_word_junction() {
    let output = marked_source("Hello world");
    assert_eq!(output, format!("H{}ello world", marker_token(0)));
}

#[test]
fn heading_token_lands_inside_the_word_not_before_the_hash() {
    let output = marked_source("# Title");
    assert_eq!(output, format!("# T{}itle", marker_token(0)));
}

#[test]
fn markdown_scenario_end_to_end() {
    let output = marked_source("# Title\n\nSome text.");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("# T{}itle", marker_token(0)));
    assert_eq!(lines[1], " ");
    assert_eq!(lines[2], format!("S{}ome text.", marker_token(2)));
}

#[test]
fn injection_is_a_pure_function_of_its_input() {
    let input = "# Title\n\n|a|b|\n[ref]: http://example.com\n<p>tag</p>";
    assert_eq!(marked_source(input), marked_source(input));
}

#[test]
fn token_index_follows_the_line_number() {
    let output = marked_source("one\ntwo\nthree");
    let lines: Vec<&str> = output.split('\n').collect();
    assert!(lines[0].contains(&marker_token(0)));
    assert!(lines[1].contains(&marker_token(1)));
    assert!(lines[2].contains(&marker_token(2)));
}

#[test]
fn punctuation_only_lines_are_left_unmarked() {
    let output = marked_source("***\n- - -");
    assert!(!output.contains(MARKER_IDENT));
}
