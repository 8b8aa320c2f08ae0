//! # ScalaInvoke Translate Command Handler
//!
//! File: cli/src/commands/translate.rs
//!
//! ## Overview
//!
//! `scalainvoke translate` shows how documentation directives map onto the
//! vocabulary of a toolchain generation. Each accepted batch is printed on its
//! own line; a rejected batch prints nothing and logs a warning naming the
//! flag. Useful when migrating a build from Scala 2 to Scala 3.
//!
//! ```bash
//! $ scalainvoke translate --scala-version 3 -- -doc-title Demo -doc-format:html -doc-version 1.0
//! -project Demo
//! -project-version 1.0
//! ```
//!
use super::invocation_args::group_batches;
use clap::Parser;
use scalainvoke::{
    core::error::Result,
    invocation::compat::{translate, ToolchainGeneration},
};
use tracing::{debug, warn};

/// Arguments for `scalainvoke translate`.
#[derive(Parser, Debug)]
#[command(about = "Show how documentation flags translate for a toolchain version")]
pub struct TranslateArgs {
    /// Target Scala version (e.g. 3.3.1 or 2.13.12).
    #[arg(long, default_value = "3")]
    pub scala_version: String,

    /// Directives to translate, grouped into batches.
    #[arg(last = true, required = true)]
    pub tool_args: Vec<String>,
}

pub async fn handle_translate(args: TranslateArgs) -> Result<()> {
    let generation = ToolchainGeneration::from_version(&args.scala_version)?;
    let table = generation.flag_table();

    for batch in group_batches(&args.tool_args) {
        let translation = translate(&batch, table);
        if let Some(unsupported) = &translation.warning {
            warn!("{}", unsupported);
        } else if translation.args.is_empty() {
            debug!("Dropped obsolete directive {:?}", batch);
        } else {
            println!("{}", translation.args.join(" "));
        }
    }
    Ok(())
}
