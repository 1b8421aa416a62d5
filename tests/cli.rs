//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_idforge(store: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_idforge");
    Command::new(bin)
        .args(args)
        .env("IDFORGE_STORE", store)
        .env("IDFORGE_NOW", "2025-01-27T14:30:52Z")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run idforge binary")
}

fn fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("idforge_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_format(dir: &Path, contents: &str) -> String {
    let path = dir.join("format.yaml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn show_empty_store() {
    let dir = fresh_dir("show_empty");
    let output = run_idforge(&dir.join("store"), &["show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("No inventories found"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn configure_then_issue_sequential_ids() {
    let dir = fresh_dir("issue");
    let store = dir.join("store");
    let format = write_format(
        &dir,
        concat!(
            "enabled: true\nseparator: '-'\nsequenceCounter: 7\nelements:\n",
            "  - { id: a, type: text, value: BK }\n",
            "  - { id: b, type: datetime, format: YYYYMMDD }\n",
            "  - { id: c, type: sequence, padding: 3 }\n",
        ),
    );

    assert!(run_idforge(&store, &["init", "books", "--title", "Books"]).status.success());
    let set = run_idforge(&store, &["set-format", "books", &format, "--expected-version", "1"]);
    assert!(set.status.success(), "{}", String::from_utf8_lossy(&set.stderr));
    assert!(String::from_utf8_lossy(&set.stdout).contains("version 2"));

    let next = run_idforge(&store, &["next", "books", "--count", "2"]);
    assert!(next.status.success());
    assert_eq!(String::from_utf8_lossy(&next.stdout), "BK-20250127-007\nBK-20250127-008\n");

    let again = run_idforge(&store, &["next", "books"]);
    assert_eq!(String::from_utf8_lossy(&again.stdout), "BK-20250127-009\n");

    let show = run_idforge(&store, &["show", "books"]);
    assert!(String::from_utf8_lossy(&show.stdout).contains("Next counter: 10"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn stale_expected_version_is_rejected() {
    let dir = fresh_dir("stale");
    let store = dir.join("store");
    let format = write_format(&dir, "enabled: true\nelements:\n  - { type: random6 }\n");

    assert!(run_idforge(&store, &["init", "tools"]).status.success());
    assert!(run_idforge(&store, &["set-format", "tools", &format, "--expected-version", "1"])
        .status
        .success());

    let stale = run_idforge(&store, &["set-format", "tools", &format, "--expected-version", "1"]);
    let stderr = String::from_utf8_lossy(&stale.stderr);
    assert!(!stale.status.success());
    assert!(stderr.contains("modified concurrently"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_reports_first_failing_rule() {
    let dir = fresh_dir("validate");
    let format = write_format(&dir, "enabled: true\nelements: []\n");

    let output = run_idforge(&dir, &["validate", &format]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("at least one ID element is required when custom ID is enabled"));

    let json = run_idforge(&dir, &["validate", &format, "--json"]);
    let stdout = String::from_utf8_lossy(&json.stdout);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["valid"], false);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn preview_renders_guid_shape() {
    let dir = fresh_dir("preview");
    let format = write_format(&dir, "enabled: true\nelements:\n  - { type: guid }\n");

    let output = run_idforge(&dir, &["preview", &format]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let id = stdout.trim();
    assert!(output.status.success());
    let (head, tail) = id.split_once('-').expect("guid has one dash");
    assert_eq!((head.len(), tail.len()), (8, 4));
    assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_pinned_clock_is_a_config_error() {
    let bin = env!("CARGO_BIN_EXE_idforge");
    let output = Command::new(bin)
        .args(["show"])
        .env("IDFORGE_NOW", "not-a-time")
        .output()
        .expect("failed to run idforge binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("IDFORGE_NOW"));
}

#[test]
fn oversized_count_is_refused_without_issuing() {
    let dir = fresh_dir("oversized");
    let store = dir.join("store");
    assert!(run_idforge(&store, &["init", "books"]).status.success());

    let output = run_idforge(&store, &["next", "books", "-n", "18446744073709551615"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "usage error, not a panic: {stderr}");
    assert!(!stderr.contains("panicked"));
    assert!(output.stdout.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = fresh_dir("invalid");
    let output = run_idforge(&dir, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
    let _ = std::fs::remove_dir_all(&dir);
}
