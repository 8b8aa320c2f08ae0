//! # ScalaInvoke Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities that are not specific to the documentation tool itself.
//! Currently this is only process execution; the command builder and flag
//! translation live under `invocation` because they encode the tool's
//! command-line contract.
//!

/// Launching external processes, redirecting their output and monitoring them.
pub mod process;
