//! # Shared Invocation Arguments
//!
//! File: cli/src/commands/invocation_args.rs
//!
//! ## Overview
//!
//! The `doc` and `plan` commands describe the same invocation, so they share
//! one argument struct and one function that turns arguments plus loaded
//! configuration into a ready `DocCaller`.
//!
//! Precedence: command-line flags, then configuration, then built-in defaults.
//! JVM args and directives from configuration come first; command-line ones
//! are appended after them.
//!
//! ## Tool Arguments
//!
//! Everything after `--` is split into directive batches. A new batch starts
//! at each element beginning with `-`, so
//! `-- -doc-title "My Project" -doc-format:html` yields the batches
//! `["-doc-title", "My Project"]` and `["-doc-format:html"]`.
//!
use anyhow::Context;
use clap::Args;
use scalainvoke::{
    core::{config::Config, diagnostics::DiagnosticSink, error::Result},
    DocCaller, ProcessExecutor, RedirectPolicy, ToolchainGeneration,
};
use std::{path::Path, sync::Arc, time::Duration};
use tracing::debug;

#[derive(Args, Debug, Default, Clone)]
pub struct InvocationArgs {
    /// Classpath holding the compiler, library and documentation tool jars.
    #[arg(long, env = "SCALAINVOKE_CLASSPATH")]
    pub classpath: Option<String>,

    /// Output directory for the generated documentation.
    #[arg(long, short = 'd')]
    pub output_dir: Option<String>,

    /// Compiled classes root handed to the tool.
    #[arg(long)]
    pub classes_dir: Option<String>,

    /// Installed Scala version (e.g. 3.3.1 or 2.13.12); selects the flag vocabulary.
    #[arg(long)]
    pub scala_version: Option<String>,

    /// Entry-point class of the documentation tool.
    #[arg(long)]
    pub main_class: Option<String>,

    /// Interpreter executable (default: java).
    #[arg(long)]
    pub interpreter: Option<String>,

    /// JVM option passed before the entry point. Repeatable.
    #[arg(long = "jvm-arg", allow_hyphen_values = true)]
    pub jvm_args: Vec<String>,

    /// Documentation directives for the tool, grouped into batches.
    ///
    /// Each element starting with '-' begins a new batch. Attach a value that
    /// itself starts with '-' as -flag=value, e.g. -doc-footer="-- internal --".
    #[arg(last = true)]
    pub tool_args: Vec<String>,
}

/// Splits trailing tool arguments into directive batches.
pub fn group_batches(args: &[String]) -> Vec<Vec<String>> {
    let mut batches: Vec<Vec<String>> = Vec::new();
    for arg in args {
        if let Some((flag, value)) = split_attached_value(arg) {
            batches.push(vec![flag.to_string(), value.to_string()]);
            continue;
        }
        match batches.last_mut() {
            Some(batch) if !arg.starts_with('-') => batch.push(arg.clone()),
            _ => batches.push(vec![arg.clone()]),
        }
    }
    batches
}

/// `-flag=value` as `(-flag, value)`. Colon settings such as
/// `-Xmacro-settings:a=b` are left whole.
fn split_attached_value(arg: &str) -> Option<(&str, &str)> {
    let (flag, value) = arg.split_once('=')?;
    (flag.len() > 1 && flag.starts_with('-') && !flag.contains(':')).then_some((flag, value))
}

/// Builds a caller from arguments and configuration. Nothing is launched.
pub fn build_caller(
    args: &InvocationArgs,
    cfg: &Config,
    working_dir: &Path,
    redirect: RedirectPolicy,
    timeout: Option<Duration>,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<DocCaller> {
    let version = args
        .scala_version
        .as_deref()
        .unwrap_or(&cfg.toolchain.version);
    let generation = ToolchainGeneration::from_version(version)
        .with_context(|| format!("Cannot select a flag vocabulary for version '{}'", version))?;
    debug!("Using {} vocabulary for Scala {}", generation, version);

    let classes_dir = args
        .classes_dir
        .clone()
        .unwrap_or_else(|| cfg.doc.classes_dir.clone());
    let interpreter = args
        .interpreter
        .clone()
        .unwrap_or_else(|| cfg.toolchain.interpreter.clone());

    let executor = ProcessExecutor::new(working_dir, redirect, sink.clone())
        .with_timeout(timeout)
        .interruptible(true);
    let mut caller =
        DocCaller::new(generation, classes_dir, executor, sink).with_interpreter(interpreter);
    if let Some(main_class) = args.main_class.as_ref().or(cfg.toolchain.main_class.as_ref()) {
        caller = caller.with_main_class(main_class.clone());
    }

    caller.add_jvm_args(cfg.doc.jvm_args.iter().cloned());
    caller.add_jvm_args(args.jvm_args.iter().cloned());

    for batch in cfg.doc.args.iter().chain(group_batches(&args.tool_args).iter()) {
        caller.add_args(batch);
    }

    if let Some(classpath) = args.classpath.as_ref().or(cfg.doc.classpath.as_ref()) {
        caller.add_option("classpath", classpath);
    }
    if let Some(output_dir) = args.output_dir.as_ref().or(cfg.doc.output_dir.as_ref()) {
        caller.add_option("output-dir", output_dir);
    }
    Ok(caller)
}
