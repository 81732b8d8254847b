//! Snapshot tests for the splitters on realistic input

use textcut::config::{load_defaults, Loader};
use textcut::splitting::{split_lines_to_map, split_to_distinct_map};
use textcut::{join_distinct, split_into_words, split_on_line_break, TokenSet, WordSplitter};

#[test]
fn test_words_in_prose() {
    let words = WordSplitter::default().split("Hello (world)! Is this {fine}? Yes: [mostly].");

    insta::assert_debug_snapshot!(words, @r###"
    [
        "Hello",
        "world",
        "Is",
        "this",
        "fine",
        "Yes",
        "mostly",
    ]
    "###);
}

#[test]
fn test_words_with_configured_stops() {
    let config = Loader::new()
        .set_override("words.stops", "/-")
        .expect("override to apply")
        .build()
        .expect("config to build");
    let splitter = config.word_splitter().expect("stops to be valid");

    insta::assert_debug_snapshot!(splitter.split("2024-01-15/report draft"), @r###"
    [
        "2024",
        "01",
        "15",
        "report draft",
    ]
    "###);
}

#[test]
fn test_mixed_line_endings() {
    let lines = split_on_line_break("first\r\nsecond\rthird\n\nfifth");

    insta::assert_debug_snapshot!(lines, @r###"
    [
        "first",
        "second",
        "third",
        "",
        "fifth",
    ]
    "###);
}

#[test]
fn test_key_value_records() {
    let record = split_lines_to_map("host:example.org\nport:8080\nsecure", ':')
        .expect("keys to be unique");

    insta::assert_debug_snapshot!(record, @r###"
    {
        "host": "example.org",
        "port": "8080",
        "secure": "",
    }
    "###);
}

#[test]
fn test_query_string_first_key_wins() {
    let query = split_to_distinct_map("tag=rust&tag=text&page=2", '=', '&');

    insta::assert_debug_snapshot!(query, @r###"
    {
        "page": "2",
        "tag": "rust",
    }
    "###);
}

#[test]
fn test_words_round_trip_through_join() {
    let config = load_defaults().expect("defaults to deserialize");
    let words = split_into_words("b a, b c; a", &TokenSet::from(" ,;"));
    let unique = join_distinct(&words, ',');
    assert_eq!(unique, "b,a,c");
    assert_eq!(config.lines.join(&words), "b\r\na\r\nb\r\nc\r\na");
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(WordSplitter::default().split("").is_empty());
    assert!(split_on_line_break("").is_empty());
    assert!(split_lines_to_map("", ':').expect("empty is valid").is_empty());
}
