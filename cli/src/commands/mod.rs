//! # ScalaInvoke Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Handlers for the top-level commands of the `scalainvoke` binary. Each
//! module defines its own argument struct and an async handler returning
//! `core::error::Result`.
//!
//! - `doc`: run the documentation tool (blocking or monitored)
//! - `plan`: print the command line without running it
//! - `translate`: show how directives map to a toolchain's vocabulary
//!

/// Runs the documentation tool.
pub mod doc;
/// Arguments and caller construction shared by `doc` and `plan`.
pub mod invocation_args;
/// Prints the assembled command line.
pub mod plan;
/// Translates documentation directives for a toolchain version.
pub mod translate;
