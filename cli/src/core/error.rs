//! # ScalaInvoke Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout ScalaInvoke. It follows
//! a two-level approach:
//! - `InvokeError` / `LaunchError`: typed errors produced by the invocation core
//!   (command building, process launch, tool exit status).
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by configuration
//!   loading and the CLI command handlers, where adding context matters more
//!   than matching on variants.
//!
//! The taxonomy:
//! - Configuration errors never launch a process.
//! - Launch errors mean the tool never meaningfully ran and always surface.
//! - Tool failures (non-zero exit) surface only in strict mode.
//!
//! Rejected documentation flags are not errors at all; the translator returns
//! them as `UnsupportedFlag` values that become warnings.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match caller.run_with(false, true).await {
//!     Ok(_) => println!("docs generated"),
//!     Err(InvokeError::ToolFailure { code, .. }) => eprintln!("scaladoc exited with {}", code),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use std::{io, path::PathBuf, sync::Arc, time::Duration};
use thiserror::Error;

/// Errors surfaced by the invocation core.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("{tool} returned non-zero value: {code}")]
    ToolFailure { tool: String, code: i32 },
}

/// Reasons an invocation never produced a usable exit status.
///
/// Platform causes are held in an `Arc` so the error can travel through the
/// monitor's result channel, which requires `Clone`.
#[derive(Error, Debug, Clone)]
pub enum LaunchError {
    #[error("Cannot launch an empty command line")]
    EmptyCommand,

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("Failed to open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("Failed while waiting for the process: {source}")]
    Wait {
        #[source]
        source: Arc<io::Error>,
    },

    #[error("Interrupted while waiting for the process")]
    Interrupted,

    #[error("Process did not finish within {}s", .after.as_secs())]
    TimedOut { after: Duration },
}

impl LaunchError {
    pub(crate) fn spawn(program: &str, source: io::Error) -> Self {
        LaunchError::Spawn {
            program: program.to_string(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn wait(source: io::Error) -> Self {
        LaunchError::Wait {
            source: Arc::new(source),
        }
    }
}

/// Type alias for Result using anyhow::Error for application-level code.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let config_err = InvokeError::Config("classpath is not set".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: classpath is not set"
        );

        let failure = InvokeError::ToolFailure {
            tool: "scaladoc".into(),
            code: 1,
        };
        assert_eq!(failure.to_string(), "scaladoc returned non-zero value: 1");

        let timed_out = LaunchError::TimedOut {
            after: Duration::from_secs(30),
        };
        assert_eq!(
            timed_out.to_string(),
            "Process did not finish within 30s"
        );
    }

    #[test]
    fn test_launch_error_keeps_platform_cause() {
        let err = LaunchError::spawn(
            "java",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.to_string().contains("No such file or directory"));
        assert!(err.source().is_some(), "platform cause should be chained");

        // The transparent wrapper must not hide the cause either.
        let wrapped: InvokeError = err.into();
        assert!(wrapped.to_string().starts_with("Failed to start 'java'"));
    }
}
