//! # Redirection Policy
//!
//! File: cli/src/common/process/redirect.rs
//!
//! Decides where a child's stdout and stderr go. Both log policies capture
//! both streams into the same file: the stderr handle is a clone of the
//! stdout handle, so writes interleave in the order the child makes them.
//!
use crate::core::config::RedirectMode;
use crate::core::error::LaunchError;
use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
    process::Stdio,
    sync::Arc,
};

/// File name of the tool log, relative to the working directory.
pub const LOG_FILE_NAME: &str = "scaladoc.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Child writes to the parent's own stdout/stderr.
    Inherit,
    /// Both streams truncate into the log file.
    OverwriteLog(PathBuf),
    /// Both streams append to the log file.
    AppendLog(PathBuf),
}

impl RedirectPolicy {
    /// Policy for a configured mode, with the log file placed under `working_dir`.
    pub fn from_mode(mode: RedirectMode, working_dir: &Path) -> Self {
        let log_path = working_dir.join(LOG_FILE_NAME);
        match mode {
            RedirectMode::Inherit => RedirectPolicy::Inherit,
            RedirectMode::OverwriteLog => RedirectPolicy::OverwriteLog(log_path),
            RedirectMode::AppendLog => RedirectPolicy::AppendLog(log_path),
        }
    }

    pub fn log_path(&self) -> Option<&Path> {
        match self {
            RedirectPolicy::Inherit => None,
            RedirectPolicy::OverwriteLog(p) | RedirectPolicy::AppendLog(p) => Some(p.as_path()),
        }
    }

    /// Opens whatever the policy needs and returns `(stdout, stderr)`.
    pub(crate) fn open(&self) -> Result<(Stdio, Stdio), LaunchError> {
        let file = match self {
            RedirectPolicy::Inherit => return Ok((Stdio::inherit(), Stdio::inherit())),
            RedirectPolicy::OverwriteLog(path) => open_log(path, false)?,
            RedirectPolicy::AppendLog(path) => open_log(path, true)?,
        };
        let path = self.log_path().unwrap_or(Path::new(LOG_FILE_NAME));
        let err_file = file.try_clone().map_err(|e| LaunchError::LogFile {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?;
        Ok((Stdio::from(file), Stdio::from(err_file)))
    }
}

fn open_log(path: &Path, append: bool) -> Result<File, LaunchError> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path).map_err(|e| LaunchError::LogFile {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_mode_places_log_in_working_dir() {
        let dir = Path::new("/work");
        assert_eq!(
            RedirectPolicy::from_mode(RedirectMode::Inherit, dir),
            RedirectPolicy::Inherit
        );
        assert_eq!(
            RedirectPolicy::from_mode(RedirectMode::AppendLog, dir).log_path(),
            Some(Path::new("/work/scaladoc.log"))
        );
    }

    #[test]
    fn test_overwrite_truncates_existing_log() {
        let dir = tempdir().unwrap();
        let log = dir.path().join(LOG_FILE_NAME);
        std::fs::write(&log, "old content that is long").unwrap();

        let mut file = open_log(&log, false).unwrap();
        file.write_all(b"new").unwrap();
        drop(file);
        assert_eq!(std::fs::read_to_string(&log).unwrap(), "new");
    }

    #[test]
    fn test_append_keeps_existing_log() {
        let dir = tempdir().unwrap();
        let log = dir.path().join(LOG_FILE_NAME);
        std::fs::write(&log, "first\n").unwrap();

        let mut file = open_log(&log, true).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);
        assert_eq!(std::fs::read_to_string(&log).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_log_is_launch_error() {
        let dir = tempdir().unwrap();
        let policy = RedirectPolicy::OverwriteLog(dir.path().join("missing/dir/scaladoc.log"));
        assert!(matches!(policy.open(), Err(LaunchError::LogFile { .. })));
    }
}
