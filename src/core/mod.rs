//! Core denoise pipeline: request, invocation, process runner, reporting

pub mod denoiser;
pub mod invocation;
pub mod preview;
pub mod probe;
pub mod report;
pub mod request;
pub mod runner;

pub use denoiser::Denoiser;
pub use invocation::{Invocation, InvocationBuilder};
pub use preview::{PreviewOutcome, PreviewRequest, Previewer, DEFAULT_PREVIEW_SECS};
pub use probe::{probe_audio, AudioInfo};
pub use report::{InvocationResult, InvocationState, Reporter, SilentReporter};
pub use request::{dedicated_path, DenoiseRequest};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
