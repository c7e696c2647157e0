// src/config/settings.rs
//
// Locations of the external tools this crate drives

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FFMPEG: &str = "ffmpeg";
pub const DEFAULT_FFPLAY: &str = "ffplay";

/// Which executables to run. Bare names are resolved through PATH by the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Transcoder used for denoising
    pub ffmpeg: PathBuf,
    /// Player used for previews
    pub ffplay: PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG),
            ffplay: PathBuf::from(DEFAULT_FFPLAY),
        }
    }
}

impl ToolSettings {
    pub fn with_ffmpeg(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg = path.into();
        self
    }

    pub fn with_ffplay(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffplay = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_path_lookup() {
        let settings = ToolSettings::default();
        assert_eq!(settings.ffmpeg, PathBuf::from("ffmpeg"));
        assert_eq!(settings.ffplay, PathBuf::from("ffplay"));
    }

    #[test]
    fn test_overrides() {
        let settings = ToolSettings::default()
            .with_ffmpeg("/opt/ffmpeg/bin/ffmpeg")
            .with_ffplay("/opt/ffmpeg/bin/ffplay");
        assert_eq!(settings.ffmpeg, PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(settings.ffplay, PathBuf::from("/opt/ffmpeg/bin/ffplay"));
    }
}
