//! # Process Executor
//!
//! File: cli/src/common/process/executor.rs
//!
//! ## Overview
//!
//! Launches a materialized argument vector as a child process and reports an
//! `ExecutionResult`. Two modes share the launch step:
//!
//! - `run` (blocking): suspends the calling task until the child exits, the
//!   user presses Ctrl-C, or the optional deadline passes.
//! - `spawn` (non-blocking): returns an `ExecutionMonitor` right after the OS
//!   launch; a background task owns the child and waits for it.
//!
//! The executor never decides whether a failure stops the build. It only
//! classifies what happened; the caller applies strict or lenient handling.
//!
//! Both modes need to run inside a tokio runtime.
//!
use super::{monitor::ExecutionMonitor, redirect::RedirectPolicy};
use crate::core::{diagnostics::DiagnosticSink, error::LaunchError};
use std::{
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
    sync::Arc,
    time::Duration,
};
use tokio::process::{Child, Command};

/// Exit code reported when the process was killed or ended without a code
/// (e.g. terminated by a signal).
pub const TERMINATED_EXIT_CODE: i32 = -1;

/// Outcome of one execution. Immutable once produced.
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    Success,
    Failed(i32),
    LaunchError(LaunchError),
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success)
    }

    pub(crate) fn from_wait(status: io::Result<ExitStatus>) -> Self {
        match status {
            Ok(status) if status.success() => ExecutionResult::Success,
            Ok(status) => ExecutionResult::Failed(status.code().unwrap_or(TERMINATED_EXIT_CODE)),
            Err(e) => ExecutionResult::LaunchError(LaunchError::wait(e)),
        }
    }
}

pub struct ProcessExecutor {
    working_dir: PathBuf,
    redirect: RedirectPolicy,
    timeout: Option<Duration>,
    interruptible: bool,
    sink: Arc<dyn DiagnosticSink>,
}

impl ProcessExecutor {
    pub fn new(
        working_dir: impl Into<PathBuf>,
        redirect: RedirectPolicy,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            redirect,
            timeout: None,
            interruptible: false,
            sink,
        }
    }

    /// Kills the child and reports `LaunchError::TimedOut` once `timeout` passes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether Ctrl-C during a blocking `run` kills the child (default: false).
    ///
    /// Turning this on makes `run` listen for SIGINT through tokio. Tokio keeps
    /// that listener for the rest of the process, so afterwards Ctrl-C no longer
    /// terminates the host program by default. Only a program that owns its
    /// signal handling should enable it.
    pub fn interruptible(mut self, interruptible: bool) -> Self {
        self.interruptible = interruptible;
        self
    }

    pub fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn redirect(&self) -> &RedirectPolicy {
        &self.redirect
    }

    /// Runs `argv` to completion.
    pub async fn run(&self, argv: &[String]) -> ExecutionResult {
        let mut child = match self.launch(argv) {
            Ok(child) => child,
            Err(e) => return ExecutionResult::LaunchError(e),
        };
        let deadline = self.timeout.unwrap_or_default();

        tokio::select! {
            biased;
            status = child.wait() => ExecutionResult::from_wait(status),
            Ok(()) = tokio::signal::ctrl_c(), if self.interruptible => {
                self.sink.warn("Interrupted, stopping the documentation tool");
                terminate(&mut child).await;
                ExecutionResult::LaunchError(LaunchError::Interrupted)
            }
            _ = tokio::time::sleep(deadline), if self.timeout.is_some() => {
                terminate(&mut child).await;
                ExecutionResult::LaunchError(LaunchError::TimedOut { after: deadline })
            }
        }
    }

    /// Launches `argv` and hands back a monitor without waiting.
    pub fn spawn(&self, argv: &[String]) -> Result<ExecutionMonitor, LaunchError> {
        let child = self.launch(argv)?;
        Ok(ExecutionMonitor::start(child, self.timeout))
    }

    fn launch(&self, argv: &[String]) -> Result<Child, LaunchError> {
        let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
        let (stdout, stderr) = self.redirect.open()?;

        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(&self.working_dir)
            .stdout(stdout)
            .stderr(stderr)
            .kill_on_drop(true);

        let child = command
            .spawn()
            .map_err(|e| LaunchError::spawn(program, e))?;
        self.sink.trace(
            "launch",
            &[
                ("program", program.clone()),
                ("pid", format!("{:?}", child.id())),
                ("working_dir", self.working_dir.display().to_string()),
            ],
        );
        if let Some(log) = self.redirect.log_path() {
            self.sink
                .info(&format!("Tool output is written to {}", log.display()));
        }
        Ok(child)
    }
}

/// Best-effort kill followed by reaping the child.
pub(crate) async fn terminate(child: &mut Child) {
    if let Err(e) = child.kill().await {
        tracing::debug!("Failed to kill child process: {}", e);
    }
}
