// src/core/report.rs
//
// Outcome of a denoise invocation and the collaborator that gets told about it.

use serde::Serialize;
use std::time::Duration;

use super::request::DenoiseRequest;
use super::runner::ProcessOutput;
use crate::error::DenoiseError;

/// Lifecycle of one invocation. `Running` moves straight to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationState {
    Running,
    Succeeded,
    Failed,
}

/// What came back from the external tool. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    tool: String,
    status: Option<i32>,
    stderr: String,
    output_size: Option<u64>,
    elapsed: Duration,
}

impl InvocationResult {
    pub fn new(
        tool: impl Into<String>,
        output: ProcessOutput,
        output_size: Option<u64>,
        elapsed: Duration,
    ) -> Self {
        Self {
            tool: tool.into(),
            status: output.status,
            stderr: output.stderr,
            output_size,
            elapsed,
        }
    }

    pub fn state(&self) -> InvocationState {
        if self.status == Some(0) {
            InvocationState::Succeeded
        } else {
            InvocationState::Failed
        }
    }

    pub fn succeeded(&self) -> bool {
        self.state() == InvocationState::Succeeded
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn status(&self) -> Option<i32> {
        self.status
    }

    /// Diagnostic text exactly as the tool wrote it
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Size of the produced file; only known after a successful run
    pub fn output_size(&self) -> Option<u64> {
        self.output_size
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Turn a failed run into `ExternalToolFailure`, passing successes through.
    pub fn into_result(self) -> Result<Self, DenoiseError> {
        if self.succeeded() {
            Ok(self)
        } else {
            Err(DenoiseError::ExternalToolFailure {
                tool: self.tool,
                status: self.status,
                stderr: self.stderr,
            })
        }
    }
}

/// Receives progress of a denoise run. Injected into the denoiser so the core
/// never writes to the console itself.
pub trait Reporter {
    /// The tool is about to be launched
    fn started(&self, request: &DenoiseRequest);

    /// The tool exited; `result.state()` is terminal
    fn finished(&self, request: &DenoiseRequest, result: &InvocationResult);

    /// The tool could not be run at all
    fn aborted(&self, _request: &DenoiseRequest, _error: &DenoiseError) {}
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn started(&self, _request: &DenoiseRequest) {}

    fn finished(&self, _request: &DenoiseRequest, _result: &InvocationResult) {}
}
