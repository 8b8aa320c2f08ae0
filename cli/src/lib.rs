//! # ScalaInvoke
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! A stable invocation layer over the Scala documentation toolchain, whose
//! command-line surface changes between releases. Build steps accumulate JVM
//! options, documentation directives and options on a `DocCaller`, which
//! translates directives for the installed toolchain generation, assembles
//! the command line and runs it once, blocking or through a monitor.
//!
//! ## Modules
//!
//! - `core`: configuration, diagnostics sink, error types
//! - `invocation`: spec, flag translation, command builder, `DocCaller`
//! - `common`: process execution (redirection, executor, monitor)
//!
pub mod common;
pub mod core;
pub mod invocation;

pub use crate::common::process::{
    ExecutionMonitor, ExecutionResult, ProcessExecutor, RedirectPolicy,
};
pub use crate::core::diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use crate::core::error::{InvokeError, LaunchError};
pub use crate::invocation::{DocCaller, ToolchainGeneration};
