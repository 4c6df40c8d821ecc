//! Integration tests for top-level CLI behavior.

use std::process::Command;

/// A roster command with no `ROSTER_*` settings, run outside the source
/// tree so a local `.env` cannot leak in.
fn roster() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
    cmd.current_dir(std::env::temp_dir())
        .env_remove("ROSTER_COUNT")
        .env_remove("ROSTER_PREFIX")
        .env_remove("ROSTER_FORMAT");
    cmd
}

fn run_roster(args: &[&str]) -> std::process::Output {
    roster()
        .args(args)
        .output()
        .expect("failed to run roster binary")
}

#[test]
fn default_run_prints_thousand_records() {
    let output = run_roster(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with(r#"[Record { name: "Test Instance0" }"#));
    assert!(stdout.trim_end().ends_with(r#"Record { name: "Test Instance999" }]"#));
    assert_eq!(stdout.matches("Record {").count(), 1000);
}

#[test]
fn json_output_is_a_roster_document() {
    let output = run_roster(&["generate", "--count", "3", "--format", "json"]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["count"], 3);
    assert_eq!(doc["records"][2]["name"], "Test Instance2");
    assert!(doc["run_id"].is_string());
}

#[test]
fn separate_runs_get_distinct_ids() {
    let first = run_roster(&["generate", "--count", "1", "--format", "json"]);
    let second = run_roster(&["generate", "--count", "1", "--format", "json"]);
    let a: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_ne!(a["run_id"], b["run_id"]);
    assert_eq!(a["records"], b["records"]);
}

#[test]
fn env_settings_apply() {
    let output = roster()
        .env("ROSTER_COUNT", "2")
        .env("ROSTER_PREFIX", "item-")
        .output()
        .expect("failed to run roster binary");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout.trim_end(),
        r#"[Record { name: "item-0" }, Record { name: "item-1" }]"#
    );
}

#[test]
fn invalid_env_count_exits_with_error() {
    let output = roster()
        .env("ROSTER_COUNT", "lots")
        .output()
        .expect("failed to run roster binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("ROSTER_COUNT"));
}

#[test]
fn verify_reports_label_range() {
    let output = run_roster(&["verify"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("ok: 1000 records, labels Test Instance0 .. Test Instance999"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_roster(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn oversized_count_exits_with_error() {
    for sub in ["generate", "verify"] {
        let output = run_roster(&[sub, "--count", "18446744073709551615"]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("--count"));
        assert!(!stderr.contains("panicked"));
    }
}

#[test]
fn help_prints_usage_to_stdout() {
    let output = run_roster(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("verify"));
}

#[test]
fn generate_help_lists_flags() {
    let output = run_roster(&["generate", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--count"));
    assert!(stdout.contains("--format"));
}

#[test]
fn version_prints_to_stdout() {
    let output = run_roster(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("roster "));
}
