//! # ScalaInvoke Diagnostics
//!
//! File: cli/src/core/diagnostics.rs
//!
//! ## Overview
//!
//! Components of the invocation core report what they are doing through a
//! `DiagnosticSink` handed to them at construction. Nothing in the core looks
//! up a process-wide logger on its own.
//!
//! Two sinks are provided:
//! - `TracingSink`: forwards everything to the `tracing` macros. This is what
//!   the binary uses, so output is controlled by `-v` / `RUST_LOG`.
//! - `MemorySink`: keeps every line in memory. Build tools embedding the
//!   library use it to surface warnings in their own reports, and tests use it
//!   to count them.
//!
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Side channel for structured diagnostics and user-facing warnings.
///
/// Implementations must not influence control flow; every method is fire and forget.
pub trait DiagnosticSink: Send + Sync {
    /// Structured key/value record describing the inputs of `operation`.
    fn trace(&self, operation: &str, fields: &[(&str, String)]);
    /// Informational message (e.g. the displayed command line).
    fn info(&self, message: &str);
    /// Caller-visible warning (e.g. a rejected documentation flag).
    fn warn(&self, message: &str);
}

/// Sink forwarding to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn shared() -> Arc<dyn DiagnosticSink> {
        Arc::new(TracingSink)
    }
}

impl DiagnosticSink for TracingSink {
    fn trace(&self, operation: &str, fields: &[(&str, String)]) {
        for (key, value) in fields {
            debug!(operation, key, value = %value, "{} = {}", key, value);
        }
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Info,
    Warn,
}

/// One line captured by `MemorySink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Sink that records everything it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Messages of all `Warn` records, oldest first.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    /// Messages of all `Info` records, oldest first.
    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: String) {
        self.lock().push(Record { level, message });
    }

    // A poisoned lock only means another thread panicked mid-push; the data is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn trace(&self, operation: &str, fields: &[(&str, String)]) {
        for (key, value) in fields {
            self.push(Level::Trace, format!("{}: {} = {}", operation, key, value));
        }
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message.to_string());
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message.to_string());
    }
}
