//! # Invocation Spec
//!
//! File: cli/src/invocation/spec.rs
//!
//! The accumulated plan for a single documentation tool launch. It is plain
//! data: appending arguments and recording options never touches the
//! filesystem or validates anything. Validation happens when the command line
//! is built.
//!
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Option key that sets the classpath.
pub const CLASSPATH_KEY: &str = "classpath";
/// Option key that sets the output directory.
pub const OUTPUT_DIR_KEY: &str = "output-dir";
/// Keys older callers use for the same two settings.
const LEGACY_CLASSPATH_KEY: &str = "-classpath";
const LEGACY_OUTPUT_DIR_KEY: &str = "-d";

/// Effect of `InvocationSpec::set_option` on the structural fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEffect {
    /// The classpath was set; carries the replaced value, if any.
    Classpath { previous: Option<String> },
    OutputPath,
    /// Stored only.
    Stored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub entry_point: String,
    pub classpath: Option<String>,
    pub jvm_args: Vec<String>,
    pub program_args: Vec<String>,
    pub options: BTreeMap<String, String>,
    pub output_path: PathBuf,
    pub working_dir: PathBuf,
    /// Compiled classes root passed as the tool's source argument.
    pub source_root: String,
}

impl InvocationSpec {
    /// Creates an empty spec. The output path defaults to
    /// `<working_dir>/target/site/scaladocs`.
    pub fn new(
        entry_point: impl Into<String>,
        source_root: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        let working_dir = working_dir.into();
        Self {
            entry_point: entry_point.into(),
            classpath: None,
            jvm_args: Vec::new(),
            program_args: Vec::new(),
            options: BTreeMap::new(),
            output_path: default_output_path(&working_dir),
            working_dir,
            source_root: source_root.into(),
        }
    }

    pub fn push_jvm_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jvm_args.extend(args.into_iter().map(Into::into));
    }

    pub fn push_program_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program_args.extend(args.into_iter().map(Into::into));
    }

    /// Records an option; `classpath` and `output-dir` (and their legacy
    /// spellings) also update the matching field.
    pub fn set_option(&mut self, key: &str, value: &str) -> OptionEffect {
        self.options.insert(key.to_string(), value.to_string());
        match key {
            CLASSPATH_KEY | LEGACY_CLASSPATH_KEY => OptionEffect::Classpath {
                previous: self.classpath.replace(value.to_string()),
            },
            OUTPUT_DIR_KEY | LEGACY_OUTPUT_DIR_KEY => {
                self.output_path = PathBuf::from(value);
                OptionEffect::OutputPath
            }
            _ => OptionEffect::Stored,
        }
    }
}

fn default_output_path(working_dir: &Path) -> PathBuf {
    working_dir.join("target").join("site").join("scaladocs")
}
