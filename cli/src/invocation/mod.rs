//! # Invocation Core
//!
//! File: cli/src/invocation/mod.rs
//!
//! ## Overview
//!
//! Everything that encodes the documentation tool's command-line contract:
//! - `spec`: the accumulated plan of one launch (`InvocationSpec`)
//! - `compat`: flag vocabularies per toolchain generation and the translator
//! - `builder`: `InvocationSpec` -> argument vector, and back
//! - `caller`: `DocCaller`, the public contract used by build steps
//!
pub mod builder;
pub mod caller;
pub mod compat;
pub mod spec;

pub use builder::{parse_command, CommandBuilder, ParsedCommand};
pub use caller::{judge, DocCaller};
pub use compat::{translate, ToolchainGeneration, Translation, UnsupportedFlag};
pub use spec::InvocationSpec;
