//! # Execution Monitor
//!
//! File: cli/src/common/process/monitor.rs
//!
//! Handle over a process started by `ProcessExecutor::spawn`. A background
//! task owns the child and publishes the final `ExecutionResult` on a watch
//! channel, so the result only becomes visible after the process has been
//! reaped. The monitor never touches the child's stdio; that belongs to the
//! redirection policy chosen at launch.
//!
//! Dropping the monitor does not stop the process.
//!
use super::executor::{terminate, ExecutionResult, TERMINATED_EXIT_CODE};
use crate::core::error::LaunchError;
use std::{io, time::Duration};
use tokio::{
    process::Child,
    sync::{oneshot, watch},
};

#[derive(Debug)]
pub struct ExecutionMonitor {
    pid: Option<u32>,
    result: watch::Receiver<Option<ExecutionResult>>,
    kill: Option<oneshot::Sender<()>>,
}

impl ExecutionMonitor {
    pub(crate) fn start(mut child: Child, timeout: Option<Duration>) -> Self {
        let pid = child.id();
        let (result_tx, result_rx) = watch::channel(None);
        let (kill_tx, kill_rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = supervise(&mut child, kill_rx, timeout).await;
            tracing::debug!(?pid, ?result, "Spawned process finished");
            result_tx.send_replace(Some(result));
        });

        Self {
            pid,
            result: result_rx,
            kill: Some(kill_tx),
        }
    }

    /// OS process id, if the process was still running at launch time.
    pub fn id(&self) -> Option<u32> {
        self.pid
    }

    pub fn is_finished(&self) -> bool {
        self.result.borrow().is_some()
    }

    /// The result if the process has terminated, without waiting.
    pub fn try_result(&self) -> Option<ExecutionResult> {
        self.result.borrow().clone()
    }

    /// Waits for termination and returns the result. Can be called repeatedly.
    pub async fn wait(&mut self) -> ExecutionResult {
        let observed = match self.result.wait_for(Option::is_some).await {
            Ok(result) => result.clone(),
            Err(_) => None,
        };
        observed.unwrap_or_else(|| {
            ExecutionResult::LaunchError(LaunchError::wait(io::Error::other(
                "process supervisor stopped without reporting a result",
            )))
        })
    }

    /// Requests termination. The process ends as `Failed(TERMINATED_EXIT_CODE)`
    /// unless it had already exited. Further calls do nothing.
    pub fn kill(&mut self) {
        if let Some(kill) = self.kill.take() {
            // The supervisor is gone once the process has finished; nothing to kill then.
            let _ = kill.send(());
        }
    }
}

async fn supervise(
    child: &mut Child,
    kill_rx: oneshot::Receiver<()>,
    timeout: Option<Duration>,
) -> ExecutionResult {
    let deadline = timeout.unwrap_or_default();
    // An exit that already happened wins over a late kill request.
    tokio::select! {
        biased;
        status = child.wait() => ExecutionResult::from_wait(status),
        Ok(()) = kill_rx => {
            terminate(child).await;
            ExecutionResult::Failed(TERMINATED_EXIT_CODE)
        }
        _ = tokio::time::sleep(deadline), if timeout.is_some() => {
            terminate(child).await;
            ExecutionResult::LaunchError(LaunchError::TimedOut { after: deadline })
        }
    }
}
