//! # ScalaInvoke CLI Translate Integration Tests
//!
//! File: cli/tests/translate.rs
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_translate_migrates_and_drops() {
    let dir = tempdir().unwrap();
    scalainvoke_cmd(dir.path())
        .args([
            "translate",
            "--",
            "-doc-title",
            "Demo",
            "-doc-format:html",
            "-doc-source-url",
            "github://org/repo",
        ])
        .assert()
        .success()
        .stdout("-project Demo\n-source-links github://org/repo\n")
        .stderr(predicate::str::contains("Unsupported").not());
}

#[test]
fn test_translate_warns_on_unsupported_flag() {
    let dir = tempdir().unwrap();
    scalainvoke_cmd(dir.path())
        .args(["translate", "--scala-version", "3.3.1", "--", "-diagrams"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("'-diagrams'"));
}

#[test]
fn test_translate_rejects_unknown_version() {
    let dir = tempdir().unwrap();
    scalainvoke_cmd(dir.path())
        .args(["translate", "--scala-version", "1.0", "--", "-groups"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported Scala version"));
}

#[test]
fn test_main_version_flag() {
    let dir = tempdir().unwrap();
    scalainvoke_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
