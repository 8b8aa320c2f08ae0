//! # ScalaInvoke Doc Command Handler
//!
//! File: cli/src/commands/doc.rs
//!
//! ## Overview
//!
//! This module implements `scalainvoke doc`, which generates API documentation
//! by running the installed Scala documentation tool once.
//!
//! ## Architecture
//!
//! 1. Load the configuration (`core::config`).
//! 2. Build a `DocCaller` from flags and configuration (`invocation_args`).
//! 3. Choose the output redirection (`--log` or `execution.redirect`).
//! 4. Run it:
//!    - default: block until the tool exits;
//!    - `--spawn`: launch through an `ExecutionMonitor` and report progress
//!      while waiting for it.
//! 5. A non-zero exit fails the command unless `--no-fail` (or
//!    `fail_on_non_zero = false`) is in effect, in which case only a warning
//!    is printed.
//!
//! ## Usage
//!
//! ```bash
//! # Scala 3 docs, legacy flags are migrated automatically
//! scalainvoke doc --classpath "$CP" -- -doc-title "My Project" -doc-version 1.0.0
//!
//! # Write tool output to ./scaladoc.log and keep going on failure
//! scalainvoke doc --classpath "$CP" --log overwrite --no-fail
//!
//! # Give up after ten minutes
//! scalainvoke doc --classpath "$CP" --spawn --timeout 600
//! ```
//!
use super::invocation_args::{build_caller, InvocationArgs};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use scalainvoke::{
    core::{
        config::{self, RedirectMode},
        error::Result,
    },
    invocation::judge,
    DocCaller, RedirectPolicy, TracingSink,
};
use std::time::Duration;
use tracing::{debug, info};

/// How often `--spawn` reports that the tool is still running.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Output destination selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Tool output goes to this terminal.
    Inherit,
    /// Tool output replaces ./scaladoc.log.
    Overwrite,
    /// Tool output is appended to ./scaladoc.log.
    Append,
}

impl From<LogTarget> for RedirectMode {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Inherit => RedirectMode::Inherit,
            LogTarget::Overwrite => RedirectMode::OverwriteLog,
            LogTarget::Append => RedirectMode::AppendLog,
        }
    }
}

/// Arguments for `scalainvoke doc`.
#[derive(Parser, Debug)]
#[command(
    about = "Generate API documentation with the installed Scala toolchain",
    long_about = "Builds the documentation tool command line from configuration and flags,\n\
                  migrating legacy documentation flags to the installed toolchain's vocabulary,\n\
                  and runs it once."
)]
pub struct DocArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Where the tool's stdout and stderr go.
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    /// Report a non-zero exit as a warning instead of failing.
    #[arg(long)]
    pub no_fail: bool,

    /// Print the full command line before running it.
    #[arg(long)]
    pub display_cmd: bool,

    /// Launch without blocking and monitor the process until it exits.
    #[arg(long)]
    pub spawn: bool,

    /// Kill the tool after this many seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Handler for `scalainvoke doc`.
pub async fn handle_doc(args: DocArgs) -> Result<()> {
    info!("Handling doc command...");
    debug!("Doc args: {:?}", args);

    let cfg = config::load_config().context("Failed to load ScalaInvoke configuration")?;
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;

    let mode = args
        .log
        .map(RedirectMode::from)
        .unwrap_or(cfg.execution.redirect);
    let redirect = RedirectPolicy::from_mode(mode, &working_dir);
    let timeout = args
        .timeout
        .or(cfg.execution.timeout_secs)
        .map(Duration::from_secs);
    let display_cmd = args.display_cmd || cfg.execution.display_cmd;
    let fail_on_non_zero = cfg.execution.fail_on_non_zero && !args.no_fail;

    let caller = build_caller(
        &args.invocation,
        &cfg,
        &working_dir,
        redirect,
        timeout,
        TracingSink::shared(),
    )?;
    let output_path = caller.spec().output_path.clone();

    // Printed regardless of the log level.
    if display_cmd {
        println!("cmd: {}", caller.command_line()?.join(" "));
    }

    let succeeded = if args.spawn {
        run_monitored(caller, fail_on_non_zero).await?
    } else {
        caller.run_with(false, fail_on_non_zero).await?
    };

    if succeeded {
        println!("✅ Documentation generated in {}", output_path.display());
    } else {
        println!("⚠️ Documentation tool reported a failure; continuing as requested.");
    }
    Ok(())
}

/// Spawns the tool and polls its monitor until it finishes.
async fn run_monitored(caller: DocCaller, fail_on_non_zero: bool) -> Result<bool> {
    let tool = caller.generation().tool_name();
    let mut monitor = caller.spawn(false)?;
    info!("Started {} (pid {:?})", tool, monitor.id());

    let mut ticker = tokio::time::interval(PROGRESS_INTERVAL);
    ticker.tick().await; // First tick completes immediately.
    let result = loop {
        tokio::select! {
            result = monitor.wait() => break result,
            _ = ticker.tick() => info!("{} is still running...", tool),
            Ok(()) = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping {}", tool);
                monitor.kill();
            }
        }
    };
    let outcome = judge(result, tool, fail_on_non_zero, &TracingSink)?;
    Ok(outcome)
}
