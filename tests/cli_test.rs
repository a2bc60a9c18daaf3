#[path = "common/mod.rs"]
mod common;

use std::fs;

use common::ItembankTest;

#[test]
fn test_help_lists_subcommands() {
    let itembank = ItembankTest::new();
    let stdout = itembank.run_success(&["--help"]);
    for command in ["list", "show", "filters", "health", "clear", "explore"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_clear_removes_saved_filters() {
    let itembank = ItembankTest::new();
    let path = itembank.storage_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"level":["G6"]}"#).unwrap();

    let stdout = itembank.run_success(&["clear"]);
    assert!(stdout.contains("Cleared saved filters"));
    assert!(!path.exists());
}

#[test]
fn test_clear_without_saved_filters() {
    let itembank = ItembankTest::new();
    itembank.run_success(&["clear"]);
    assert!(!itembank.storage_file().exists());
}

#[test]
fn test_invalid_page_size_is_rejected() {
    let itembank = ItembankTest::new();
    let stderr = itembank.run_failure(&["list", "--page-size", "30"]);
    assert!(stderr.contains("30"));
}

#[test]
fn test_invalid_sort_column_is_rejected() {
    let itembank = ItembankTest::new();
    itembank.run_failure(&["list", "--sort", "difficulty"]);
}

#[test]
fn test_unreachable_service_fails() {
    let itembank = ItembankTest::new();
    let stderr = itembank.run_failure(&["health"]);
    assert!(!stderr.is_empty());

    itembank.run_failure(&["list", "--level", "G6"]);
}

#[test]
fn test_invalid_api_url_override() {
    let itembank = ItembankTest::new();
    let stderr = itembank.run_failure(&["--api-url", "ftp://example.com", "health"]);
    assert!(stderr.contains("ftp://example.com"));
}
