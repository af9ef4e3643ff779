//! Tests for item loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_lines_skips_blank_lines() {
    let items = parse_items("Apple\n\nPineapple\n   \nOrange\n").unwrap();
    assert_eq!(items, vec!["Apple", "Pineapple", "Orange"]);
}

#[test]
fn test_parse_lines_strips_carriage_returns() {
    let items = parse_items("Apple\r\nOrange\r\n").unwrap();
    assert_eq!(items, vec!["Apple", "Orange"]);
}

#[test]
fn test_parse_lines_keeps_inner_whitespace() {
    let items = parse_items("  indented item\nsecond  item\n").unwrap();
    assert_eq!(items, vec!["  indented item", "second  item"]);
}

#[test]
fn test_parse_json_array() {
    let items = parse_items(r#"["Apple", "Pine apple", "Orange"]"#).unwrap();
    assert_eq!(items, vec!["Apple", "Pine apple", "Orange"]);
}

#[test]
fn test_parse_json_array_with_leading_whitespace() {
    let items = parse_items("\n  [\"a\", \"b\"]").unwrap();
    assert_eq!(items, vec!["a", "b"]);
}

#[test]
fn test_parse_invalid_json_array() {
    let result = parse_items(r#"["Apple", 3]"#);
    assert!(matches!(result, Err(AutocomboError::InvalidItems(_))));
}

#[test]
fn test_parse_empty_input_is_no_items() {
    assert!(matches!(parse_items(""), Err(AutocomboError::NoItems)));
    assert!(matches!(parse_items("\n \n"), Err(AutocomboError::NoItems)));
}

#[test]
fn test_parse_empty_json_array_is_no_items() {
    assert!(matches!(parse_items("[]"), Err(AutocomboError::NoItems)));
}

#[test]
fn test_read_items_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "red").unwrap();
    writeln!(file, "green").unwrap();
    writeln!(file, "blue").unwrap();

    let items = read_items(Some(file.path())).unwrap();
    assert_eq!(items, vec!["red", "green", "blue"]);
}

#[test]
fn test_read_items_missing_file_is_io_error() {
    let result = read_items(Some(Path::new("/nonexistent/autocombo/items.txt")));
    assert!(matches!(result, Err(AutocomboError::Io(_))));
}
