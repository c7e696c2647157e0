//! Configuration module for SilentLoveFilter

mod levels;
mod settings;

pub use levels::{FilterChain, LoveLevel, HIGHPASS_HZ, LOWPASS_HZ};
pub use settings::{ToolSettings, DEFAULT_FFMPEG, DEFAULT_FFPLAY};
