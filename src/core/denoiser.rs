// src/core/denoiser.rs
//
// The denoise entry point: validate, build the FFmpeg call, run it, report.

use log::{info, warn};
use std::fs;
use std::time::Instant;

use super::invocation::{Invocation, InvocationBuilder};
use super::report::{InvocationResult, Reporter};
use super::request::DenoiseRequest;
use super::runner::{ProcessRunner, SystemRunner};
use crate::config::ToolSettings;
use crate::error::Result;

/// Runs denoise requests through an external FFmpeg.
///
/// Holds no per-request state, so one instance can serve any number of
/// sequential requests.
pub struct Denoiser<R = SystemRunner> {
    builder: InvocationBuilder,
    runner: R,
}

impl Denoiser<SystemRunner> {
    pub fn new(settings: &ToolSettings) -> Self {
        Self::with_runner(settings, SystemRunner)
    }
}

impl<R: ProcessRunner> Denoiser<R> {
    pub fn with_runner(settings: &ToolSettings, runner: R) -> Self {
        Self {
            builder: InvocationBuilder::new(&settings.ffmpeg),
            runner,
        }
    }

    /// The command that `denoise` would run for this request
    pub fn plan(&self, request: &DenoiseRequest) -> Result<Invocation> {
        self.builder.build(request)
    }

    /// Denoise `request.input` into `request.output`.
    ///
    /// A missing input fails before the reporter or the tool are involved.
    /// A non-zero exit comes back as `ExternalToolFailure` carrying the
    /// tool's stderr untouched.
    pub fn denoise(&self, request: &DenoiseRequest, reporter: &dyn Reporter) -> Result<InvocationResult> {
        let invocation = self.builder.build(request)?;

        reporter.started(request);
        let start = Instant::now();

        let output = match self.runner.run(&invocation) {
            Ok(output) => output,
            Err(e) => {
                warn!("{} could not be run: {}", invocation.tool_name(), e);
                reporter.aborted(request, &e);
                return Err(e);
            }
        };

        let output_size = if output.success() {
            fs::metadata(&request.output).map(|m| m.len()).ok()
        } else {
            None
        };

        let result = InvocationResult::new(invocation.tool_name(), output, output_size, start.elapsed());

        if result.succeeded() {
            info!(
                "Denoised {} -> {} (level {}, nf {} dB) in {:.2?}",
                request.input.display(),
                request.output.display(),
                request.level,
                request.noise_floor(),
                result.elapsed()
            );
        } else {
            warn!(
                "{} failed on {} with status {:?}",
                result.tool(),
                request.input.display(),
                result.status()
            );
        }

        reporter.finished(request, &result);
        result.into_result()
    }
}
