//! # ScalaInvoke Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration that feeds the
//! `doc` and `plan` commands: which toolchain version is installed, how the
//! interpreter is called, where tool output goes, and the default classpath,
//! JVM options and documentation flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the command handlers, not here)
//! 2. Project-specific `.scalainvoke.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/scalainvoke/config.toml`
//! 4. Default values defined in the code
//!
//! The project search stops at the first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [toolchain]
//! version = "3.3.1"
//!
//! [execution]
//! redirect = "overwrite-log"
//! fail_on_non_zero = false
//!
//! [doc]
//! classpath = "~/.m2/repository/org/scala-lang/scala3-library_3/3.3.1/scala3-library_3-3.3.1.jar"
//! jvm_args = ["-Xmx1g"]
//! args = [["-doc-title", "My Project"], ["-doc-version", "1.0.0"]]
//! ```
//!
use crate::core::error::{InvokeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Resolved configuration: every layer merged and defaults applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub toolchain: ToolchainConfig,
    pub execution: ExecutionConfig,
    pub doc: DocConfig,
}

/// Which toolchain is installed and how it is entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolchainConfig {
    /// Scala version string; its major part selects the flag vocabulary.
    pub version: String,
    /// Executable that hosts the documentation tool.
    pub interpreter: String,
    /// Entry-point class. Defaults per toolchain generation when absent.
    pub main_class: Option<String>,
}

/// Where process output goes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectMode {
    #[default]
    Inherit,
    OverwriteLog,
    AppendLog,
}

/// How the tool process is run and judged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionConfig {
    pub redirect: RedirectMode,
    pub fail_on_non_zero: bool,
    pub display_cmd: bool,
    /// Optional deadline in seconds; the process is killed once it passes.
    pub timeout_secs: Option<u64>,
}

/// Inputs of the documentation run.
#[derive(Debug, Clone, PartialEq)]
pub struct DocConfig {
    /// Compiled classes root handed to the tool as its source root.
    pub classes_dir: String,
    pub output_dir: Option<String>,
    pub classpath: Option<String>,
    pub jvm_args: Vec<String>,
    /// Documentation directives; each inner list is one flag batch.
    pub args: Vec<Vec<String>>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            version: "3".to_string(),
            interpreter: "java".to_string(),
            main_class: None,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            redirect: RedirectMode::default(),
            fail_on_non_zero: true,
            display_cmd: false,
            timeout_secs: None,
        }
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            classes_dir: "target/classes".to_string(),
            output_dir: None,
            classpath: None,
            jvm_args: Vec::new(),
            args: Vec::new(),
        }
    }
}

/// One configuration file as written. A missing key stays `None`, so a file
/// that sets a value back to its default still overrides the layer below.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    toolchain: ToolchainLayer,
    #[serde(default)]
    execution: ExecutionLayer,
    #[serde(default)]
    doc: DocLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ToolchainLayer {
    version: Option<String>,
    interpreter: Option<String>,
    main_class: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ExecutionLayer {
    redirect: Option<RedirectMode>,
    fail_on_non_zero: Option<bool>,
    display_cmd: Option<bool>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct DocLayer {
    classes_dir: Option<String>,
    output_dir: Option<String>,
    classpath: Option<String>,
    jvm_args: Option<Vec<String>>,
    args: Option<Vec<Vec<String>>>,
}

impl ConfigLayer {
    /// Key-wise merge: every key set in `self` wins over `below`.
    fn over(self, below: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            toolchain: ToolchainLayer {
                version: self.toolchain.version.or(below.toolchain.version),
                interpreter: self.toolchain.interpreter.or(below.toolchain.interpreter),
                main_class: self.toolchain.main_class.or(below.toolchain.main_class),
            },
            execution: ExecutionLayer {
                redirect: self.execution.redirect.or(below.execution.redirect),
                fail_on_non_zero: self
                    .execution
                    .fail_on_non_zero
                    .or(below.execution.fail_on_non_zero),
                display_cmd: self.execution.display_cmd.or(below.execution.display_cmd),
                timeout_secs: self.execution.timeout_secs.or(below.execution.timeout_secs),
            },
            doc: DocLayer {
                classes_dir: self.doc.classes_dir.or(below.doc.classes_dir),
                output_dir: self.doc.output_dir.or(below.doc.output_dir),
                classpath: self.doc.classpath.or(below.doc.classpath),
                jvm_args: self.doc.jvm_args.or(below.doc.jvm_args),
                args: self.doc.args.or(below.doc.args),
            },
        }
    }

    /// Fills every unset key with its built-in default.
    fn resolve(self) -> Config {
        let defaults = Config::default();
        Config {
            toolchain: ToolchainConfig {
                version: self.toolchain.version.unwrap_or(defaults.toolchain.version),
                interpreter: self
                    .toolchain
                    .interpreter
                    .unwrap_or(defaults.toolchain.interpreter),
                main_class: self.toolchain.main_class,
            },
            execution: ExecutionConfig {
                redirect: self.execution.redirect.unwrap_or(defaults.execution.redirect),
                fail_on_non_zero: self
                    .execution
                    .fail_on_non_zero
                    .unwrap_or(defaults.execution.fail_on_non_zero),
                display_cmd: self
                    .execution
                    .display_cmd
                    .unwrap_or(defaults.execution.display_cmd),
                timeout_secs: self.execution.timeout_secs,
            },
            doc: DocConfig {
                classes_dir: self.doc.classes_dir.unwrap_or(defaults.doc.classes_dir),
                output_dir: self.doc.output_dir,
                classpath: self.doc.classpath,
                jvm_args: self.doc.jvm_args.unwrap_or_default(),
                args: self.doc.args.unwrap_or_default(),
            },
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".scalainvoke.toml";

/// Loads the merged, expanded and validated configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.scalainvoke.toml) found.");
            None
        }
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    let Some(proj_dirs) = ProjectDirs::from("org", "ScalaInvoke", "scalainvoke") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!("User configuration file not found at {}", config_path.display());
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.scalainvoke.toml`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project keys override user keys; anything neither file sets gets its default.
fn merge_configs(user: ConfigLayer, project: Option<ConfigLayer>) -> Config {
    match project {
        Some(project) => project.over(user).resolve(),
        None => user.resolve(),
    }
}

fn expand_config_paths(config: &mut Config) {
    config.doc.classes_dir = shellexpand::tilde(&config.doc.classes_dir).into_owned();
    if let Some(dir) = config.doc.output_dir.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
    }
    if let Some(cp) = config.doc.classpath.as_mut() {
        *cp = shellexpand::tilde(cp).into_owned();
    }
    debug!("Expanded doc paths: {:?}", config.doc);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.toolchain.interpreter.trim().is_empty() {
        return Err(anyhow!(InvokeError::Config(
            "toolchain.interpreter must not be empty".to_string()
        )));
    }
    if matches!(config.toolchain.main_class.as_deref(), Some(m) if m.trim().is_empty()) {
        return Err(anyhow!(InvokeError::Config(
            "toolchain.main_class must not be empty when set".to_string()
        )));
    }
    if config.execution.timeout_secs == Some(0) {
        return Err(anyhow!(InvokeError::Config(
            "execution.timeout_secs must be greater than zero".to_string()
        )));
    }
    if let Some(i) = config.doc.args.iter().position(|batch| batch.is_empty()) {
        return Err(anyhow!(InvokeError::Config(format!(
            "doc.args entry {} is an empty flag batch",
            i
        ))));
    }
    Ok(())
}
