use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

use autocombo::picker::read_items;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("autocomplete menu"))
        .stdout(predicate::str::contains("--keep-open"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("autocombo"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent-items.txt")
        .assert()
        .failure();
}

#[test]
fn test_cli_with_empty_file() {
    cargo_bin_cmd!()
        .arg(fixture_path("empty.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No items"));
}

#[test]
fn test_cli_with_empty_stdin() {
    cargo_bin_cmd!()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No items"));
}

#[test]
fn test_cli_with_invalid_json_items() {
    cargo_bin_cmd!()
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item list"));
}

#[test]
fn test_cli_rejects_bad_blur_delay() {
    cargo_bin_cmd!()
        .arg("--blur-delay-ms")
        .arg("soon")
        .assert()
        .failure();
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("fruits.txt").exists());
    assert!(fixture_path("fruits.json").exists());
    assert!(fixture_path("empty.txt").exists());
    assert!(fixture_path("invalid.json").exists());
}

#[test]
fn test_line_and_json_fixtures_agree() {
    let lines = read_items(Some(fixture_path("fruits.txt").as_path())).unwrap();
    let json = read_items(Some(fixture_path("fruits.json").as_path())).unwrap();

    assert_eq!(lines, json);
    assert_eq!(lines, vec!["Apple", "Pineapple", "Orange"]);
}
