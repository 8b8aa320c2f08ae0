//! # ScalaInvoke CLI Doc Integration Tests
//!
//! File: cli/tests/doc.rs
//!
//! ## Overview
//!
//! Runs `scalainvoke doc` against a fake documentation tool: the interpreter
//! is `sh` and the script path is passed as the first JVM argument, so the
//! script receives the rest of the built command line as its arguments.
//!
#![cfg(unix)]

mod common;
use common::*;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn doc_cmd(dir: &Path) -> Command {
    let script = write_fake_tool(dir);
    let mut cmd = scalainvoke_cmd(dir);
    cmd.args(["doc", "--interpreter", "sh", "--classpath", "/a:/b"])
        .arg(format!("--jvm-arg={}", script.display()));
    cmd
}

#[test]
fn test_doc_passes_translated_command_line() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .args(["--", "-doc-title", "Demo", "-doc-format:html", "-groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation generated"));

    let args = recorded_args(dir.path());
    let out = dir.path().join("target/site/scaladocs");
    assert_eq!(
        args,
        vec![
            "-classpath".to_string(),
            "/a:/b".to_string(),
            "-Dscala.usejavacp=true".to_string(),
            "dotty.tools.scaladoc.Main".to_string(),
            "-project".to_string(),
            "Demo".to_string(),
            "-groups".to_string(),
            "-d".to_string(),
            out.display().to_string(),
            "target/classes".to_string(),
        ]
    );
}

#[test]
fn test_doc_strict_failure_carries_exit_code() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .env("FAKE_EXIT", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scaladoc_3 returned non-zero value: 1"));
}

#[test]
fn test_doc_no_fail_continues() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .env("FAKE_EXIT", "1")
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("reported a failure"));
}

#[test]
fn test_doc_missing_interpreter_is_launch_error() {
    let dir = tempdir().unwrap();
    scalainvoke_cmd(dir.path())
        .args([
            "doc",
            "--no-fail",
            "--classpath",
            "/cp",
            "--interpreter",
            "definitely-not-a-real-interpreter-4711",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to start 'definitely-not-a-real-interpreter-4711'",
        ));
}

#[test]
fn test_doc_overwrite_log_captures_both_streams() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("scaladoc.log"), "stale\n").unwrap();

    doc_cmd(dir.path())
        .args(["--log", "overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fake scaladoc").not());

    let log = std::fs::read_to_string(dir.path().join("scaladoc.log")).unwrap();
    assert!(!log.contains("stale"));
    assert!(log.contains("fake scaladoc: stdout"));
    assert!(log.contains("fake scaladoc: stderr"));
}

#[test]
fn test_doc_append_log_keeps_previous_runs() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("scaladoc.log"), "previous\n").unwrap();

    doc_cmd(dir.path()).args(["--log", "append"]).assert().success();

    let log = std::fs::read_to_string(dir.path().join("scaladoc.log")).unwrap();
    assert!(log.starts_with("previous\n"));
    assert!(log.contains("fake scaladoc: stderr"));
}

#[test]
fn test_doc_spawn_mode_waits_for_tool() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .arg("--spawn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation generated"));
    assert!(!recorded_args(dir.path()).is_empty());
}

#[test]
fn test_doc_display_cmd_prints_command_line_at_default_verbosity() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .arg("--display-cmd")
        .assert()
        .success()
        .stdout(predicate::str::contains("cmd: sh "))
        .stdout(predicate::str::contains("-classpath /a:/b"));
}

#[test]
fn test_doc_display_cmd_from_project_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".scalainvoke.toml"),
        "[execution]\ndisplay_cmd = true\n",
    )
    .unwrap();
    doc_cmd(dir.path())
        .arg("--spawn")
        .assert()
        .success()
        .stdout(predicate::str::contains("cmd: sh "));
}

#[test]
fn test_doc_without_display_cmd_stays_quiet() {
    let dir = tempdir().unwrap();
    doc_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cmd: ").not());
}
