//! End-to-end tests of the `quill-verify` binary
//!
//! Each test spawns the compiled binary against a scratch harness root, so the test process's own working
//! directory is never touched.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn harness_root(cases: &[(&str, &str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let build = dir.path().join("build");
    let outputs = dir.path().join("outputs");
    fs::create_dir(&build).unwrap();
    fs::create_dir(&outputs).unwrap();

    for (name, script, golden) in cases {
        let exe = build.join(format!("{name}.exe"));
        fs::write(&exe, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(outputs.join(format!("{name}.txt")), golden).unwrap();
    }
    dir
}

fn quill_verify(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quill-verify"))
        .arg("--root")
        .arg(root)
        .arg("--no-color")
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_all_cases_pass_exit_zero() {
    let root = harness_root(&[("clear", "echo cleared", "cleared\n"), ("types", "echo int", "int")]);

    let output = quill_verify(root.path(), &[]);

    assert!(output.status.success(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2 passed"));
}

#[test]
fn test_mismatch_exit_one_and_prints_texts() {
    let root = harness_root(&[("clear", "echo cleared", "cleared"), ("types", "printf 'x\\nz\\n'", "x\ny")]);

    let output = quill_verify(root.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[!] types check failed"));
    assert!(stdout.contains("[*] Expected:\nx\ny\n[*] Got:\nx\nz\n"));
    assert!(stdout.contains("1 passed, 1 failed"));
}

#[test]
fn test_selected_case_only() {
    let root = harness_root(&[("clear", "echo cleared", "cleared"), ("types", "echo wrong", "int")]);

    let output = quill_verify(root.path(), &["clear", "-v"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[+] clear passed"));
    assert!(!stdout.contains("types"));
}

#[test]
fn test_json_format() {
    let root = harness_root(&[("clear", "echo cleared", "cleared")]);

    let output = quill_verify(root.path(), &["clear", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["success"], true);
    assert_eq!(value["cases"][0]["status"], "passed");
}

#[test]
fn test_missing_root_reports_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = quill_verify(&dir.path().join("nowhere"), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot enter harness root"));
}
