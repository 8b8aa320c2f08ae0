//! # ScalaInvoke Process Utilities
//!
//! File: cli/src/common/process/mod.rs
//!
//! ## Overview
//!
//! Running the documentation tool as a child process:
//! - **`redirect`**: where stdout/stderr go (inherit, overwrite log, append log).
//! - **`executor`**: launches an argument vector and classifies the exit, blocking or not.
//! - **`monitor`**: handle over a process launched without blocking.
//!
//! ```rust,ignore
//! let executor = ProcessExecutor::new(".", RedirectPolicy::Inherit, TracingSink::shared());
//! match executor.run(&argv).await {
//!     ExecutionResult::Success => {}
//!     ExecutionResult::Failed(code) => eprintln!("exit code {}", code),
//!     ExecutionResult::LaunchError(e) => return Err(e.into()),
//! }
//! ```
//!
pub mod executor;
pub mod monitor;
pub mod redirect;

pub use executor::{ExecutionResult, ProcessExecutor, TERMINATED_EXIT_CODE};
pub use monitor::ExecutionMonitor;
pub use redirect::{RedirectPolicy, LOG_FILE_NAME};
