//! # Documentation Tool Caller
//!
//! File: cli/src/invocation/caller.rs
//!
//! ## Overview
//!
//! `DocCaller` is the contract build steps program against. A step creates one
//! caller, feeds it JVM options, documentation directives and options, and
//! then runs it exactly once:
//!
//! ```rust,ignore
//! let executor = ProcessExecutor::new(&working_dir, RedirectPolicy::Inherit, sink.clone());
//! let mut caller = DocCaller::new(ToolchainGeneration::Scala3, "target/classes", executor, sink);
//! caller.add_jvm_args(["-Xmx1g"]);
//! caller.add_args(&["-doc-title", "My Project"]); // becomes -project on Scala 3
//! caller.add_option("classpath", &classpath);
//! caller.run(true).await?;
//! ```
//!
//! `run`, `run_with` and `spawn` consume the caller, so an invocation cannot be
//! executed a second time.
//!
//! ## Failure handling
//!
//! - Missing classpath: `InvokeError::Config`, nothing is launched.
//! - Launch problems (not found, log file, interrupted, deadline): always `Err`.
//! - Non-zero exit: `Err(ToolFailure)` in strict mode, `Ok(false)` otherwise.
//! - Rejected directives: a warning on the sink; the build carries on.
//!
use crate::{
    common::process::{ExecutionMonitor, ExecutionResult, ProcessExecutor},
    core::{diagnostics::DiagnosticSink, error::InvokeError},
    invocation::{
        builder::CommandBuilder,
        compat::{self, ToolchainGeneration},
        spec::{InvocationSpec, OptionEffect},
    },
};
use std::sync::Arc;

pub struct DocCaller {
    spec: InvocationSpec,
    generation: ToolchainGeneration,
    interpreter: String,
    executor: ProcessExecutor,
    sink: Arc<dyn DiagnosticSink>,
}

impl DocCaller {
    /// New caller for `generation`, entered through `java` and the generation's
    /// default main class. The working directory is the executor's.
    pub fn new(
        generation: ToolchainGeneration,
        source_root: impl Into<String>,
        executor: ProcessExecutor,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let spec = InvocationSpec::new(
            generation.default_main_class(),
            source_root,
            executor.working_dir(),
        );
        Self {
            spec,
            generation,
            interpreter: "java".to_string(),
            executor,
            sink,
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_main_class(mut self, main_class: impl Into<String>) -> Self {
        self.spec.entry_point = main_class.into();
        self
    }

    pub fn generation(&self) -> ToolchainGeneration {
        self.generation
    }

    pub fn spec(&self) -> &InvocationSpec {
        &self.spec
    }

    pub fn executor(&self) -> &ProcessExecutor {
        &self.executor
    }

    /// Appends interpreter options, unvalidated and in order.
    pub fn add_jvm_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.sink
            .trace("add_jvm_args", &[("jvm_args", format!("{:?}", args))]);
        self.spec.push_jvm_args(args);
    }

    /// Adds one documentation directive after translating it to the
    /// installed toolchain's vocabulary. Returns whether anything was added.
    pub fn add_args<S: AsRef<str>>(&mut self, batch: &[S]) -> bool {
        let shown: Vec<&str> = batch.iter().map(AsRef::as_ref).collect();
        self.sink
            .trace("add_args", &[("args", format!("{:?}", shown))]);

        let translation = compat::translate(batch, self.generation.flag_table());
        if let Some(unsupported) = &translation.warning {
            self.sink.warn(&unsupported.to_string());
        }
        let accepted = !translation.args.is_empty();
        self.spec.push_program_args(translation.args);
        accepted
    }

    /// Records an option. `classpath` and `output-dir` shape the command line;
    /// other keys are kept but have no effect.
    pub fn add_option(&mut self, key: &str, value: &str) {
        self.sink.trace("add_option", &[(key, value.to_string())]);
        if let OptionEffect::Classpath {
            previous: Some(previous),
        } = self.spec.set_option(key, value)
        {
            self.sink.warn(&format!(
                "Classpath was already set; replacing '{}' with '{}'",
                previous, value
            ));
        }
    }

    /// The argument vector `run` would launch.
    pub fn command_line(&self) -> Result<Vec<String>, InvokeError> {
        CommandBuilder::new(&self.interpreter).build(&self.spec)
    }

    /// Runs the tool and treats a non-zero exit as an error.
    pub async fn run(self, display_cmd: bool) -> Result<(), InvokeError> {
        self.run_with(display_cmd, true).await.map(|_| ())
    }

    /// Runs the tool. With `fail_on_non_zero` unset, a non-zero exit is
    /// reported as `Ok(false)` instead of `ToolFailure`.
    pub async fn run_with(
        self,
        display_cmd: bool,
        fail_on_non_zero: bool,
    ) -> Result<bool, InvokeError> {
        self.sink.trace(
            "run",
            &[
                ("display_cmd", display_cmd.to_string()),
                ("fail_on_non_zero", fail_on_non_zero.to_string()),
                ("jvm_args", format!("{:?}", self.spec.jvm_args)),
                ("args", format!("{:?}", self.spec.program_args)),
            ],
        );
        let argv = self.prepare(display_cmd)?;
        let result = self.executor.run(&argv).await;
        judge(
            result,
            self.generation.tool_name(),
            fail_on_non_zero,
            self.sink.as_ref(),
        )
    }

    /// Launches the tool and returns a monitor without waiting for it.
    pub fn spawn(self, display_cmd: bool) -> Result<ExecutionMonitor, InvokeError> {
        self.sink
            .trace("spawn", &[("display_cmd", display_cmd.to_string())]);
        let argv = self.prepare(display_cmd)?;
        Ok(self.executor.spawn(&argv)?)
    }

    fn prepare(&self, display_cmd: bool) -> Result<Vec<String>, InvokeError> {
        let argv = self.command_line()?;
        self.sink.trace("prepare", &[("commands", format!("{:?}", argv))]);
        if display_cmd {
            self.sink.info(&format!("cmd: {}", argv.join(" ")));
        }
        Ok(argv)
    }
}

/// Turns an execution result into the caller-facing outcome.
///
/// `Ok(true)` on success. A non-zero exit is `Err(ToolFailure)` when
/// `fail_on_non_zero` is set, otherwise a warning and `Ok(false)`. Launch
/// errors are always `Err`.
pub fn judge(
    result: ExecutionResult,
    tool: &str,
    fail_on_non_zero: bool,
    sink: &dyn DiagnosticSink,
) -> Result<bool, InvokeError> {
    match result {
        ExecutionResult::Success => Ok(true),
        ExecutionResult::Failed(code) if fail_on_non_zero => Err(InvokeError::ToolFailure {
            tool: tool.to_string(),
            code,
        }),
        ExecutionResult::Failed(code) => {
            sink.warn(&format!("{} returned non-zero value: {}", tool, code));
            Ok(false)
        }
        ExecutionResult::LaunchError(e) => Err(e.into()),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::RedirectPolicy;
    use crate::core::diagnostics::MemorySink;

    fn caller_with_sink(generation: ToolchainGeneration) -> (DocCaller, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let executor = ProcessExecutor::new("/work", RedirectPolicy::Inherit, sink.clone());
        let caller = DocCaller::new(generation, "target/classes", executor, sink.clone());
        (caller, sink)
    }

    #[test]
    fn test_unsupported_flag_warns_once_with_original_name() {
        let (mut caller, sink) = caller_with_sink(ToolchainGeneration::Scala3);
        assert!(!caller.add_args(&["-implicits-show-all"]));
        assert_eq!(sink.warnings().len(), 1);
        assert!(sink.warnings()[0].contains("'-implicits-show-all'"));
        assert!(caller.spec().program_args.is_empty());
    }

    #[test]
    fn test_html_format_dropped_without_warning() {
        let (mut caller, sink) = caller_with_sink(ToolchainGeneration::Scala3);
        assert!(!caller.add_args(&["-doc-format:html"]));
        assert!(sink.warnings().is_empty());
        assert!(caller.spec().program_args.is_empty());
    }

    #[test]
    fn test_batches_accumulate_in_order() {
        let (mut caller, sink) = caller_with_sink(ToolchainGeneration::Scala3);
        caller.add_args(&["-doc-title", "Demo"]);
        caller.add_args(&["-bogus"]);
        caller.add_args(&["-doc-version", "1.0"]);
        assert_eq!(
            caller.spec().program_args,
            vec!["-project", "Demo", "-project-version", "1.0"]
        );
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn test_command_line_uses_generation_defaults() {
        let (mut caller, _) = caller_with_sink(ToolchainGeneration::Scala2);
        caller.add_option("classpath", "/a:/b");
        let argv = caller.command_line().unwrap();
        assert_eq!(argv[0], "java");
        assert!(argv.contains(&"scala.tools.nsc.ScalaDoc".to_string()));
        assert_eq!(argv[argv.len() - 2], "/work/target/site/scaladocs");
    }

    #[test]
    fn test_overrides() {
        let (caller, _) = caller_with_sink(ToolchainGeneration::Scala3);
        let mut caller = caller
            .with_interpreter("/opt/jdk/bin/java")
            .with_main_class("custom.Main");
        caller.add_option("classpath", "/cp");
        let argv = caller.command_line().unwrap();
        assert_eq!(argv[0], "/opt/jdk/bin/java");
        assert_eq!(argv[4], "custom.Main");
    }

    #[test]
    fn test_replacing_classpath_warns() {
        let (mut caller, sink) = caller_with_sink(ToolchainGeneration::Scala3);
        caller.add_option("classpath", "/a");
        caller.add_option("classpath", "/b");
        assert_eq!(caller.spec().classpath.as_deref(), Some("/b"));
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn test_judge_strict_and_lenient() {
        let sink = MemorySink::new();
        assert!(judge(ExecutionResult::Success, "scaladoc_3", true, &sink).unwrap());
        assert!(judge(ExecutionResult::Success, "scaladoc_3", false, &sink).unwrap());

        match judge(ExecutionResult::Failed(1), "scaladoc_3", true, &sink) {
            Err(InvokeError::ToolFailure { tool, code }) => {
                assert_eq!(tool, "scaladoc_3");
                assert_eq!(code, 1);
            }
            other => panic!("expected tool failure, got {:?}", other),
        }
        assert!(sink.warnings().is_empty());

        assert!(!judge(ExecutionResult::Failed(1), "scaladoc_3", false, &sink).unwrap());
        assert_eq!(sink.warnings(), vec!["scaladoc_3 returned non-zero value: 1"]);

        let launch = ExecutionResult::LaunchError(crate::core::error::LaunchError::Interrupted);
        assert!(matches!(
            judge(launch, "scaladoc_3", false, &sink),
            Err(InvokeError::Launch(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_classpath_never_launches() {
        // The interpreter does not exist; a launch attempt would surface as a launch error.
        let (caller, sink) = caller_with_sink(ToolchainGeneration::Scala3);
        let caller = caller.with_interpreter("definitely-not-a-real-interpreter-4711");
        let err = caller.run_with(true, false).await.unwrap_err();
        assert!(matches!(err, InvokeError::Config(_)));
        assert!(sink.infos().is_empty(), "command must not be displayed");
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_launch_error_in_both_modes() {
        for strict in [true, false] {
            let (mut caller, _) = caller_with_sink(ToolchainGeneration::Scala3);
            caller.add_option("classpath", "/cp");
            let caller = caller.with_interpreter("definitely-not-a-real-interpreter-4711");
            let err = caller.run_with(false, strict).await.unwrap_err();
            assert!(matches!(err, InvokeError::Launch(_)), "strict={}", strict);
        }
    }
}
