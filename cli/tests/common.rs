//! # ScalaInvoke Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: a command handle for the
//! compiled `scalainvoke` binary that is isolated from the developer's own
//! configuration, and a fake documentation tool written as a shell script.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// # Get ScalaInvoke Command (`scalainvoke_cmd`)
///
/// Creates an `assert_cmd::Command` for the `scalainvoke` binary running in
/// `dir`, with `HOME` and `XDG_CONFIG_HOME` pointed at `dir` so no user
/// configuration leaks into the test.
pub fn scalainvoke_cmd(dir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("scalainvoke").expect("Failed to find scalainvoke binary for testing");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("SCALAINVOKE_CLASSPATH")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a shell script standing in for the documentation tool.
///
/// The script is run as `sh <script> <args...>`, so it does not need to be
/// executable. It records its arguments (one per line) in `args.txt` next to
/// itself, prints a line to stdout and one to stderr, then exits with
/// `$FAKE_EXIT` (default 0).
pub fn write_fake_tool(dir: &Path) -> PathBuf {
    let script = dir.join("fake-scaladoc.sh");
    let args_file = dir.join("args.txt");
    std::fs::write(
        &script,
        format!(
            "for a in \"$@\"; do echo \"$a\"; done > '{}'\n\
             echo 'fake scaladoc: stdout'\n\
             echo 'fake scaladoc: stderr' 1>&2\n\
             exit ${{FAKE_EXIT:-0}}\n",
            args_file.display()
        ),
    )
    .expect("Failed to write fake tool script");
    script
}

/// Arguments the fake tool received, in order.
pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.txt"))
        .expect("fake tool did not record its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}
