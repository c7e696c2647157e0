// src/config/levels.rs
//
// Denoising intensity ("love level") presets and the filter chain they select

use serde::{Deserialize, Serialize};

use crate::error::{DenoiseError, Result};

/// High-pass cutoff applied before denoising, in Hz
pub const HIGHPASS_HZ: u32 = 80;
/// Low-pass cutoff applied before denoising, in Hz
pub const LOWPASS_HZ: u32 = 4000;

/// Denoising intensity, 1 (mild) through 5 (aggressive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LoveLevel(u8);

impl LoveLevel {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    /// Validate a raw level. Anything outside 1..=5 is `InvalidIntensity`.
    pub fn new(level: i64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(DenoiseError::InvalidIntensity(level))
        }
    }

    pub fn all() -> Vec<Self> {
        (Self::MIN..=Self::MAX).map(|l| Self(l as u8)).collect()
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Noise floor in dB handed to `afftdn`: -10 at level 1 down to -30 at level 5.
    pub fn noise_floor(&self) -> i32 {
        -10 - (i32::from(self.0) - 1) * 5
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "mild",
            2 => "gentle",
            3 => "balanced",
            4 => "strong",
            _ => "aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Light touch for mostly clean recordings",
            2 => "Soft hiss and room tone",
            3 => "General purpose voice cleanup",
            4 => "Noticeable background hum and fans",
            _ => "Heavy noise, may color the voice",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }

    pub fn filter_chain(&self) -> FilterChain {
        FilterChain::for_level(*self)
    }
}

impl Default for LoveLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for LoveLevel {
    type Error = DenoiseError;

    fn try_from(level: i64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<LoveLevel> for i64 {
    fn from(level: LoveLevel) -> Self {
        i64::from(level.0)
    }
}

impl std::fmt::Display for LoveLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed band-limit + spectral denoise chain passed to `-af`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChain {
    pub highpass_hz: u32,
    pub lowpass_hz: u32,
    pub noise_floor_db: i32,
}

impl FilterChain {
    pub fn for_level(level: LoveLevel) -> Self {
        Self {
            highpass_hz: HIGHPASS_HZ,
            lowpass_hz: LOWPASS_HZ,
            noise_floor_db: level.noise_floor(),
        }
    }

    /// Render as an FFmpeg audio filter graph
    pub fn ffmpeg_filter(&self) -> String {
        format!(
            "highpass=f={},lowpass=f={},afftdn=nf={}",
            self.highpass_hz, self.lowpass_hz, self.noise_floor_db
        )
    }
}

impl std::fmt::Display for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ffmpeg_filter())
    }
}
