//! # Command Builder
//!
//! File: cli/src/invocation/builder.rs
//!
//! ## Overview
//!
//! Turns a completed `InvocationSpec` into the argument vector of one process
//! launch. The layout is fixed:
//!
//! ```text
//! <interpreter> <jvm args...> -classpath <cp> -Dscala.usejavacp=true <entry point>
//!     <program args...> -d <output path> <source root>
//! ```
//!
//! Building is a pure transformation: no filesystem access, no processes.
//! `parse_command` reverses it so a planned command line can be inspected or
//! checked by other tools.
//!
use crate::core::error::InvokeError;
use crate::invocation::spec::InvocationSpec;

/// Flag that introduces the classpath on the interpreter command line.
pub const CLASSPATH_FLAG: &str = "-classpath";
/// System property letting the tool see the interpreter's classpath.
pub const USE_JAVACP_PROPERTY: &str = "-Dscala.usejavacp=true";
/// Flag that introduces the documentation output directory.
pub const OUTPUT_FLAG: &str = "-d";

pub struct CommandBuilder<'a> {
    interpreter: &'a str,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(interpreter: &'a str) -> Self {
        Self { interpreter }
    }

    pub fn build(&self, spec: &InvocationSpec) -> Result<Vec<String>, InvokeError> {
        let classpath = match spec.classpath.as_deref() {
            Some(cp) if !cp.trim().is_empty() => cp,
            _ => {
                return Err(InvokeError::Config(
                    "classpath is not set; add the \"classpath\" option before running".into(),
                ))
            }
        };
        if self.interpreter.trim().is_empty() {
            return Err(InvokeError::Config("interpreter must not be empty".into()));
        }
        let output_path = spec.output_path.to_str().ok_or_else(|| {
            InvokeError::Config(format!(
                "output path {} is not valid UTF-8",
                spec.output_path.display()
            ))
        })?;

        let mut argv = Vec::with_capacity(spec.jvm_args.len() + spec.program_args.len() + 8);
        argv.push(self.interpreter.to_string());
        argv.extend(spec.jvm_args.iter().cloned());
        argv.push(CLASSPATH_FLAG.to_string());
        argv.push(classpath.to_string());
        argv.push(USE_JAVACP_PROPERTY.to_string());
        argv.push(spec.entry_point.clone());
        argv.extend(spec.program_args.iter().cloned());
        argv.push(OUTPUT_FLAG.to_string());
        argv.push(output_path.to_string());
        argv.push(spec.source_root.clone());
        Ok(argv)
    }
}

/// Logical view of a command line produced by `CommandBuilder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub interpreter: String,
    pub jvm_args: Vec<String>,
    pub classpath: String,
    pub entry_point: String,
    pub program_args: Vec<String>,
    pub output_path: String,
    pub source_root: String,
}

/// Splits a built argument vector back into its logical parts.
///
/// JVM args end at the first `-classpath`; program args end where the
/// trailing `-d <output> <source root>` triple begins.
pub fn parse_command<S: AsRef<str>>(argv: &[S]) -> Result<ParsedCommand, InvokeError> {
    let argv: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();
    let malformed = |what: &str| InvokeError::Config(format!("Malformed command line: {}", what));

    let (interpreter, rest) = argv.split_first().ok_or_else(|| malformed("empty"))?;
    let cp_at = rest
        .iter()
        .position(|a| *a == CLASSPATH_FLAG)
        .ok_or_else(|| malformed("missing -classpath"))?;
    let (jvm_args, rest) = rest.split_at(cp_at);

    // rest = [-classpath, cp, property, entry, program.., -d, out, root]
    if rest.len() < 7 {
        return Err(malformed("too few arguments after -classpath"));
    }
    if rest[2] != USE_JAVACP_PROPERTY {
        return Err(malformed("missing scala.usejavacp property"));
    }
    let tail = &rest[rest.len() - 3..];
    if tail[0] != OUTPUT_FLAG {
        return Err(malformed("missing trailing -d <output> <source root>"));
    }

    Ok(ParsedCommand {
        interpreter: interpreter.to_string(),
        jvm_args: jvm_args.iter().map(|s| s.to_string()).collect(),
        classpath: rest[1].to_string(),
        entry_point: rest[3].to_string(),
        program_args: rest[4..rest.len() - 3]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        output_path: tail[1].to_string(),
        source_root: tail[2].to_string(),
    })
}
