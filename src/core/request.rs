// src/core/request.rs
//
// What the caller wants denoised, and where the result goes.

use std::path::{Path, PathBuf};

use crate::config::{FilterChain, LoveLevel};
use crate::error::{DenoiseError, Result};

/// A single denoise job. The level is validated on construction; the input
/// path is only checked when the invocation is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenoiseRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub level: LoveLevel,
}

impl DenoiseRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, level: i64) -> Result<Self> {
        let level = LoveLevel::new(level)?;
        Ok(Self::with_level(input, output, level))
    }

    pub fn with_level(input: impl Into<PathBuf>, output: impl Into<PathBuf>, level: LoveLevel) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            level,
        }
    }

    pub fn noise_floor(&self) -> i32 {
        self.level.noise_floor()
    }

    pub fn filter_chain(&self) -> FilterChain {
        self.level.filter_chain()
    }

    /// Same request with the output renamed to `<prefix>_<stem>.<ext>`.
    pub fn dedicated_to(mut self, prefix: &str) -> Result<Self> {
        self.output = dedicated_path(&self.output, prefix)?;
        Ok(self)
    }
}

/// Prepend `<prefix>_` to the file stem, keeping directory and extension.
///
/// The prefix must stay inside the file name, so separators are rejected.
pub fn dedicated_path(path: &Path, prefix: &str) -> Result<PathBuf> {
    if prefix.chars().any(|c| c == '/' || c == '\\' || std::path::is_separator(c)) {
        return Err(DenoiseError::InvalidDedication(prefix.to_string()));
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{}_{}", prefix, stem);
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    Ok(path.with_file_name(name))
}
