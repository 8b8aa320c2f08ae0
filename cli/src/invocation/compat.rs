//! # Flag Compatibility Translator
//!
//! File: cli/src/invocation/compat.rs
//!
//! ## Overview
//!
//! Build steps hand documentation directives to the caller in the vocabulary
//! they were written for, which is usually the Scala 2 scaladoc one
//! (`-doc-title`, `-doc-format:html`, ...). Scala 3 scaladoc renamed several of
//! those flags and dropped others. This module maps one directive (a flag plus
//! its values, the "batch") onto the vocabulary of the installed toolchain.
//!
//! ## Rules
//!
//! - Only the leading element of a batch decides acceptance.
//! - A legacy-only directive (`-doc-format:html` on Scala 3) is dropped
//!   silently.
//! - A leading flag outside the generation's allowlist (after renaming) drops
//!   the whole batch and yields an `UnsupportedFlag` naming the flag exactly as
//!   the caller wrote it.
//! - Otherwise every element with a rename is substituted, not only the first.
//!
//! `substitute` is the rename step on its own; `translate` applies the policy
//! on top of it. Neither function logs; callers decide what to do with the
//! returned warning.
//!
use crate::core::error::InvokeError;
use std::fmt;

/// Major toolchain line; selects the flag vocabulary and the default entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainGeneration {
    Scala2,
    Scala3,
}

impl ToolchainGeneration {
    /// Derives the generation from a version string such as `3.3.1` or `2.13.12`.
    pub fn from_version(version: &str) -> Result<Self, InvokeError> {
        let version = version.trim();
        let major = version.split('.').next().unwrap_or_default();
        match major {
            "3" => Ok(ToolchainGeneration::Scala3),
            "2" if version.starts_with("2.") => Ok(ToolchainGeneration::Scala2),
            _ => Err(InvokeError::Config(format!(
                "Unsupported Scala version '{}': expected 2.x or 3.x",
                version
            ))),
        }
    }

    /// Fully qualified main class of the documentation tool.
    pub fn default_main_class(self) -> &'static str {
        match self {
            ToolchainGeneration::Scala2 => "scala.tools.nsc.ScalaDoc",
            ToolchainGeneration::Scala3 => "dotty.tools.scaladoc.Main",
        }
    }

    /// Name used when reporting the tool's exit status.
    pub fn tool_name(self) -> &'static str {
        match self {
            ToolchainGeneration::Scala2 => "scaladoc",
            ToolchainGeneration::Scala3 => "scaladoc_3",
        }
    }

    pub fn flag_table(self) -> &'static FlagTable {
        match self {
            ToolchainGeneration::Scala2 => &SCALA2_TABLE,
            ToolchainGeneration::Scala3 => &SCALA3_TABLE,
        }
    }
}

impl fmt::Display for ToolchainGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolchainGeneration::Scala2 => write!(f, "scala2"),
            ToolchainGeneration::Scala3 => write!(f, "scala3"),
        }
    }
}

/// Flag vocabulary of one toolchain generation.
#[derive(Debug)]
pub struct FlagTable {
    /// Legacy name -> current name.
    pub renames: &'static [(&'static str, &'static str)],
    /// Flag names the tool accepts, compared without any `:value` suffix.
    pub allowed: &'static [&'static str],
    /// Directives that are obsolete and dropped without a warning.
    pub dropped: &'static [&'static str],
}

impl FlagTable {
    pub fn rename(&self, arg: &str) -> Option<&'static str> {
        self.renames
            .iter()
            .find(|(legacy, _)| *legacy == arg)
            .map(|(_, current)| *current)
    }

    pub fn is_allowed(&self, flag: &str) -> bool {
        let name = flag_name(flag);
        self.allowed.iter().any(|allowed| *allowed == name)
    }

    pub fn is_dropped(&self, flag: &str) -> bool {
        self.dropped.iter().any(|dropped| *dropped == flag)
    }
}

/// `-name:value` compares as `-name`; everything else compares verbatim.
fn flag_name(flag: &str) -> &str {
    match flag.split_once(':') {
        Some((name, _)) if name.starts_with('-') => name,
        _ => flag,
    }
}

pub static SCALA3_TABLE: FlagTable = FlagTable {
    renames: &[
        ("-doc-footer", "-project-footer"),
        ("-doc-title", "-project"),
        ("-doc-version", "-project-version"),
        ("-doc-source-url", "-source-links"),
    ],
    allowed: &[
        "-project",
        "-project-version",
        "-project-logo",
        "-project-footer",
        "-source-links",
        "-revision",
        "-external-mappings",
        "-social-links",
        "-skip-by-id",
        "-skip-by-regex",
        "-doc-root-content",
        "-doc-canonical-base-url",
        "-author",
        "-groups",
        "-private",
        "-siteroot",
        "-snippet-compiler",
        "-Ygenerate-inkuire",
        "-Yapi-subdirectory",
        "-versions-dictionary-url",
        "-comment-syntax",
        "-quick-links",
        "-dynamic-side-menu",
        "-sourcepath",
        "-encoding",
        "-language",
        "-deprecation",
        "-feature",
        "-unchecked",
        "-Xfatal-warnings",
    ],
    dropped: &["-doc-format:html"],
};

pub static SCALA2_TABLE: FlagTable = FlagTable {
    renames: &[],
    allowed: &[
        "-doc-title",
        "-doc-version",
        "-doc-footer",
        "-doc-source-url",
        "-doc-format",
        "-doc-root-content",
        "-doc-external-doc",
        "-doc-generator",
        "-doc-no-compile",
        "-doc-diagrams-dot-path",
        "-author",
        "-groups",
        "-implicits",
        "-implicits-show-all",
        "-diagrams",
        "-skip-packages",
        "-no-link-warnings",
        "-private",
        "-sourcepath",
        "-encoding",
        "-language",
        "-deprecation",
        "-feature",
        "-unchecked",
        "-Xfatal-warnings",
    ],
    dropped: &[],
};

/// A batch rejected because its leading flag is unknown to the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFlag {
    pub flag: String,
}

impl fmt::Display for UnsupportedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported scaladoc flag '{}' was ignored", self.flag)
    }
}

/// Outcome of translating one batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// Arguments to append; empty when the batch was dropped.
    pub args: Vec<String>,
    pub warning: Option<UnsupportedFlag>,
}

/// Replaces every element that has a rename in `table`.
pub fn substitute<S: AsRef<str>>(batch: &[S], table: &FlagTable) -> Vec<String> {
    batch
        .iter()
        .map(|arg| {
            let arg = arg.as_ref();
            table.rename(arg).unwrap_or(arg).to_string()
        })
        .collect()
}

/// Applies the acceptance policy of `table` to one batch.
pub fn translate<S: AsRef<str>>(batch: &[S], table: &FlagTable) -> Translation {
    let Some(leading) = batch.first().map(AsRef::as_ref) else {
        return Translation::default();
    };
    if table.is_dropped(leading) {
        return Translation::default();
    }
    let migrated = substitute(batch, table);
    if !table.is_allowed(&migrated[0]) {
        return Translation {
            args: Vec::new(),
            warning: Some(UnsupportedFlag {
                flag: leading.to_string(),
            }),
        };
    }
    Translation {
        args: migrated,
        warning: None,
    }
}
