#![cfg(not(target_os = "android"))]

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_haptics-cli"))
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("haptics-cli-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn status_reports_null_backend_as_json() {
    let output = cli().args(["status", "--json"]).output().expect("status command");

    assert!(
        output.status.success(),
        "status exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    let json: Value = serde_json::from_str(&stdout).expect("valid JSON payload");
    assert_eq!(json["initialized"], true);
    assert_eq!(json["supported"], false);
    assert_eq!(json["backend"], "null");
}

#[test]
fn trigger_accepts_every_kind() {
    for kind in ["light", "medium", "heavy", "selection"] {
        let output = cli().args(["trigger", kind]).output().expect("trigger command");
        assert!(
            output.status.success(),
            "trigger {} exited with {:?}",
            kind,
            output.status.code()
        );
        let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
        assert!(stdout.contains(kind), "unexpected output: {stdout}");
    }
}

#[test]
fn trigger_rejects_unknown_kind() {
    let output = cli().args(["trigger", "rumble"]).output().expect("trigger command");
    assert!(!output.status.success());
}

#[test]
fn custom_pattern_is_not_played_on_null_backend() {
    let output = cli()
        .args(["custom", "missing.pattern"])
        .output()
        .expect("custom command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn check_pattern_validates_file() {
    let dir = temp_dir("check");
    std::fs::write(
        dir.join("double_tap.json"),
        r#"{"timings_ms": [0, 30, 60, 30], "amplitudes": [0, 255, 0, 128]}"#,
    )
    .expect("write pattern");

    let output = cli()
        .args([
            "check-pattern",
            "double_tap",
            "--json",
            "--search-dir",
            dir.to_str().unwrap(),
        ])
        .output()
        .expect("check-pattern command");
    let _ = std::fs::remove_dir_all(&dir);

    assert!(
        output.status.success(),
        "check-pattern exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    let json: Value = serde_json::from_str(&stdout).expect("valid JSON payload");
    assert_eq!(json["segments"], 4);
    assert_eq!(json["total_duration_ms"], 120);
}

#[test]
fn check_pattern_fails_for_missing_file() {
    let dir = temp_dir("missing");
    let output = cli()
        .args([
            "check-pattern",
            "missing.pattern",
            "--search-dir",
            dir.to_str().unwrap(),
        ])
        .output()
        .expect("check-pattern command");
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    assert!(stderr.contains("missing.pattern"), "unexpected stderr: {stderr}");
}

#[test]
fn check_pattern_finds_bundled_assets() {
    let output = cli()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["check-pattern", "heartbeat"])
        .output()
        .expect("check-pattern command");

    assert!(
        output.status.success(),
        "check-pattern exited with {:?}",
        output.status.code()
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    assert!(stdout.contains("5 segments, 800ms"), "unexpected output: {stdout}");
}

#[test]
fn check_pattern_rejects_overflowing_timings() {
    let dir = temp_dir("overflow");
    std::fs::write(
        dir.join("big.json"),
        r#"{"timings_ms": [18446744073709551615, 2], "amplitudes": [255, 255]}"#,
    )
    .expect("write pattern");

    let output = cli()
        .args(["check-pattern", "big", "--search-dir", dir.to_str().unwrap()])
        .output()
        .expect("check-pattern command");
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    assert!(stderr.contains("overflows"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "unexpected stderr: {stderr}");
}
