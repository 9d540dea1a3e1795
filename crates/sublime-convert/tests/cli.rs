//! Tests for the `sublime-convert` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE_NIGHT: &str = include_str!("fixtures/SampleNight.tmTheme");

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sublime-convert"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("SampleNight.tmTheme"), SAMPLE_NIGHT).unwrap();
    dir
}

#[test]
fn test_converts_to_derived_path() {
    let dir = workspace();
    let output = run(&["SampleNight.tmTheme"], dir.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Successfully converted 'SampleNight.tmTheme' to 'SampleNight.sublime-color-scheme'\n"
    );
    let written = fs::read_to_string(dir.path().join("SampleNight.sublime-color-scheme")).unwrap();
    assert!(written.starts_with("/*"));
    assert!(written.contains("\"background\": \"var(color00)\""));
}

#[test]
fn test_output_gets_extension_appended() {
    let dir = workspace();
    let output = run(&["--no-header", "SampleNight.tmTheme", "night"], dir.path());

    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("night.sublime-color-scheme")).unwrap();
    assert!(written.starts_with('{'));
}

#[test]
fn test_stdout_mode() {
    let dir = workspace();
    let output = run(&["--stdout", "--no-header", "SampleNight.tmTheme"], dir.path());

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Sample Night");
    assert!(!dir.path().join("SampleNight.sublime-color-scheme").exists());
}

#[test]
fn test_rejects_wrong_extension() {
    let dir = workspace();
    fs::write(dir.path().join("theme.json"), "{}").unwrap();
    let output = run(&["theme.json"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Error: Expected a 'tmtheme' file, was given 'json'"));
}

#[test]
fn test_reports_unparsable_input() {
    let dir = workspace();
    fs::write(dir.path().join("broken.tmTheme"), "<plist><dict>").unwrap();
    let output = run(&["broken.tmTheme"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Error: Unable to parse file 'broken.tmTheme'! Is it valid?"));
}

#[test]
fn test_reports_missing_input() {
    let dir = workspace();
    let output = run(&["missing.tmTheme"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to parse file 'missing.tmTheme'"));
}
