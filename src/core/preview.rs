// src/core/preview.rs
//
// Short audible preview through an external player (ffplay).

use log::{debug, warn};
use std::path::{Path, PathBuf};

use super::invocation::Invocation;
use super::probe::{probe_audio, AudioInfo};
use super::runner::{ProcessRunner, SystemRunner};
use crate::config::ToolSettings;
use crate::error::{DenoiseError, Result};

pub const DEFAULT_PREVIEW_SECS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub file: PathBuf,
    pub seconds: u32,
}

impl PreviewRequest {
    pub fn new(file: impl Into<PathBuf>, seconds: i64) -> Result<Self> {
        if seconds < 1 {
            return Err(DenoiseError::InvalidPreviewLength(seconds));
        }
        let seconds = u32::try_from(seconds).unwrap_or(u32::MAX);
        Ok(Self {
            file: file.into(),
            seconds,
        })
    }
}

/// How a preview went. Player failures are not errors: the file is fine, the
/// listening just didn't happen.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    Played { seconds: u32, info: Option<AudioInfo> },
    PlayerFailed { seconds: u32, stderr: String },
}

pub struct Previewer<R = SystemRunner> {
    player: PathBuf,
    runner: R,
}

impl Previewer<SystemRunner> {
    pub fn new(settings: &ToolSettings) -> Self {
        Self::with_runner(settings, SystemRunner)
    }
}

impl<R: ProcessRunner> Previewer<R> {
    pub fn with_runner(settings: &ToolSettings, runner: R) -> Self {
        Self {
            player: settings.ffplay.clone(),
            runner,
        }
    }

    /// `<ffplay> -nodisp -autoexit -loglevel error -t <seconds> <file>`
    pub fn build(&self, request: &PreviewRequest) -> Result<Invocation> {
        if !request.file.exists() {
            return Err(DenoiseError::InputNotFound(request.file.clone()));
        }

        Ok(Invocation::new(&self.player)
            .arg("-nodisp")
            .arg("-autoexit")
            .arg("-loglevel")
            .arg("error")
            .arg("-t")
            .arg(request.seconds.to_string())
            .arg(&request.file))
    }

    /// Metadata for the clip, if Symphonia can read it. Unreadable files are
    /// still handed to the player, which supports more formats.
    pub fn describe(&self, file: &Path) -> Option<AudioInfo> {
        match probe_audio(file) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!("No metadata for {}: {}", file.display(), e);
                None
            }
        }
    }

    pub fn preview(&self, request: &PreviewRequest) -> Result<PreviewOutcome> {
        if !request.file.exists() {
            return Err(DenoiseError::InputNotFound(request.file.clone()));
        }
        let info = self.describe(&request.file);

        // Never ask for more than the clip holds
        let seconds = match &info {
            Some(i) if i.duration_secs > 0.0 => request.seconds.min(i.duration_secs.ceil() as u32).max(1),
            _ => request.seconds,
        };
        let invocation = self.build(&PreviewRequest {
            file: request.file.clone(),
            seconds,
        })?;

        let output = self.runner.run(&invocation)?;
        if output.success() {
            Ok(PreviewOutcome::Played { seconds, info })
        } else {
            warn!("{} failed with status {:?}", invocation.tool_name(), output.status);
            Ok(PreviewOutcome::PlayerFailed {
                seconds,
                stderr: output.stderr,
            })
        }
    }
}
