//! SilentLoveFilter - audio denoising on top of FFmpeg
//!
//! The crate does no signal processing of its own. It validates a request,
//! builds one FFmpeg invocation with a fixed filter chain
//! (`highpass=f=80,lowpass=f=4000,afftdn=nf=<N>`), runs it, and reports the
//! outcome through an injected [`core::Reporter`].
//!
//! ## Module Structure
//!
//! - `core` - request, invocation builder, process runner, denoiser, preview
//! - `cli` - command-line interface
//! - `config` - love levels and tool locations
//! - `error` - the shared error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use silentlovefilter::config::ToolSettings;
//! use silentlovefilter::core::{Denoiser, DenoiseRequest, SilentReporter};
//!
//! let request = DenoiseRequest::new("voice.wav", "voice_clean.wav", 3)?;
//! let result = Denoiser::new(&ToolSettings::default()).denoise(&request, &SilentReporter)?;
//! println!("wrote {:?} bytes", result.output_size());
//! # Ok::<(), silentlovefilter::DenoiseError>(())
//! ```
//!
//! ## Love Levels
//!
//! | Level | Name       | Noise floor |
//! |-------|------------|-------------|
//! | 1     | mild       | -10 dB      |
//! | 2     | gentle     | -15 dB      |
//! | 3     | balanced   | -20 dB      |
//! | 4     | strong     | -25 dB      |
//! | 5     | aggressive | -30 dB      |

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use config::{FilterChain, LoveLevel, ToolSettings};
pub use crate::core::{
    Denoiser, DenoiseRequest, Invocation, InvocationBuilder, InvocationResult, InvocationState,
    ProcessRunner, Reporter, SystemRunner,
};
pub use error::DenoiseError;
