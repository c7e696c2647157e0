//! Terminal reporter: colored status lines and a spinner while FFmpeg runs

use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

use super::output::kb;
use crate::core::{DenoiseRequest, InvocationResult, Reporter};
use crate::error::DenoiseError;

/// Spinner draws to stderr and stays hidden when that is not a terminal.
pub struct ConsoleReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn started(&self, request: &DenoiseRequest) {
        println!("{}", "Starting audio denoising...".bold().green());
        println!(
            "{}",
            format!(
                "Love level: {} ({}, noise floor: {} dB)",
                request.level,
                request.level.name(),
                request.noise_floor()
            )
            .cyan()
        );

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            pb.set_style(style);
        }
        pb.set_message("Processing audio...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn finished(&self, request: &DenoiseRequest, result: &InvocationResult) {
        self.stop_spinner();

        if result.succeeded() {
            println!("{}", "Denoising complete!".bold().green());
            match result.output_size() {
                Some(size) => println!(
                    "{}",
                    format!("Output: {} (Size: {:.2} KB)", request.output.display(), kb(size)).green()
                ),
                None => println!("{}", format!("Output: {}", request.output.display()).green()),
            }
        } else {
            eprintln!("{}", "FFmpeg error:".bold().red());
            eprintln!("{}", result.stderr());
        }
    }

    fn aborted(&self, _request: &DenoiseRequest, _error: &DenoiseError) {
        self.stop_spinner();
    }
}

/// Keeps the final result for callers that render it themselves (`--json`)
#[derive(Default)]
pub struct CapturingReporter {
    result: RefCell<Option<InvocationResult>>,
}

impl CapturingReporter {
    pub fn take(&self) -> Option<InvocationResult> {
        self.result.borrow_mut().take()
    }
}

impl Reporter for CapturingReporter {
    fn started(&self, _request: &DenoiseRequest) {}

    fn finished(&self, _request: &DenoiseRequest, result: &InvocationResult) {
        *self.result.borrow_mut() = Some(result.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessOutput;

    #[test]
    fn test_capturing_reporter_keeps_last_result() {
        let reporter = CapturingReporter::default();
        let request = DenoiseRequest::new("a.wav", "b.wav", 2).unwrap();
        let result = InvocationResult::new(
            "ffmpeg",
            ProcessOutput { status: Some(0), stdout: String::new(), stderr: String::new() },
            Some(5),
            Duration::ZERO,
        );

        reporter.started(&request);
        assert!(reporter.result.borrow().is_none());
        reporter.finished(&request, &result);
        assert_eq!(reporter.take(), Some(result));
        assert!(reporter.take().is_none());
    }
}
