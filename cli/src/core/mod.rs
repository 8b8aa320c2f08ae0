//! # ScalaInvoke Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the invocation core and the CLI:
//! - `config`: Configuration loading, merging, and validation
//! - `diagnostics`: The injected logging capability (`DiagnosticSink`)
//! - `error`: Error types and the application `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::diagnostics::{DiagnosticSink, TracingSink};
//! use crate::core::error::{InvokeError, Result};
//! ```
//!
pub mod config;
pub mod diagnostics;
pub mod error;
