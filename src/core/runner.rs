// src/core/runner.rs
//
// Runs an external command to completion and captures what it printed.

use log::debug;
use std::io::ErrorKind;

use super::invocation::Invocation;
use crate::error::{DenoiseError, Result};

/// Captured result of one child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Executes invocations. Implemented by [`SystemRunner`] for real processes
/// and by test doubles.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        (**self).run(invocation)
    }
}

/// Spawns the command with piped stdout/stderr and blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!("Running: {}", invocation);

        let output = invocation.to_command().output().map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => DenoiseError::ToolUnavailable {
                tool: invocation.tool_name(),
                source: e,
            },
            _ => DenoiseError::Io(e),
        })?;

        let result = ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            "{} finished with {:?} ({} bytes stderr)",
            invocation.tool_name(),
            result.status,
            result.stderr.len()
        );

        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stderr_and_status() {
        let invocation = Invocation::new("sh")
            .arg("-c")
            .arg("echo out; echo boom >&2; exit 3");
        let output = SystemRunner.run(&invocation).unwrap();
        assert_eq!(output.status, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "boom\n");
        assert!(!output.success());
    }

    #[test]
    fn test_zero_exit_is_success() {
        let output = SystemRunner.run(&Invocation::new("true")).unwrap();
        assert!(output.success());
    }

    #[test]
    fn test_missing_program() {
        let err = SystemRunner
            .run(&Invocation::new("/nonexistent/bin/ffmpeg-xyz"))
            .unwrap_err();
        match err {
            DenoiseError::ToolUnavailable { tool, .. } => assert_eq!(tool, "ffmpeg-xyz"),
            other => panic!("expected ToolUnavailable, got {:?}", other),
        }
    }
}
