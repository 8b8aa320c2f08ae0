//! # ScalaInvoke Plan Command Handler
//!
//! File: cli/src/commands/plan.rs
//!
//! ## Overview
//!
//! `scalainvoke plan` accepts the same inputs as `doc` but only prints the
//! command line that would be launched, one argument per line. Nothing is
//! executed, so it is safe to use when checking a configuration or when
//! another tool wants to run the command itself.
//!
//! ```bash
//! scalainvoke plan --classpath /a:/b --jvm-arg=-Xmx512m -- -doc-title demo
//! ```
//!
use super::invocation_args::{build_caller, InvocationArgs};
use anyhow::Context;
use clap::Parser;
use scalainvoke::{
    core::{config, error::Result},
    RedirectPolicy, TracingSink,
};
use tracing::info;

/// Arguments for `scalainvoke plan`.
#[derive(Parser, Debug)]
#[command(about = "Print the documentation tool command line without running it")]
pub struct PlanArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,
}

pub async fn handle_plan(args: PlanArgs) -> Result<()> {
    info!("Handling plan command...");
    let cfg = config::load_config().context("Failed to load ScalaInvoke configuration")?;
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;

    let caller = build_caller(
        &args.invocation,
        &cfg,
        &working_dir,
        RedirectPolicy::Inherit, // Never launched.
        None,
        TracingSink::shared(),
    )?;
    let argv = caller
        .command_line()
        .context("Cannot assemble the documentation tool command line")?;
    for arg in argv {
        println!("{}", arg);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_args_parsing() {
        let args = PlanArgs::try_parse_from([
            "plan",
            "--scala-version",
            "2.13.12",
            "--main-class",
            "custom.Main",
            "-d",
            "/out",
        ])
        .unwrap();
        assert_eq!(args.invocation.scala_version.as_deref(), Some("2.13.12"));
        assert_eq!(args.invocation.main_class.as_deref(), Some("custom.Main"));
        assert_eq!(args.invocation.output_dir.as_deref(), Some("/out"));
    }
}
