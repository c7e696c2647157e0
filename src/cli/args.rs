//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{LoveLevel, ToolSettings, DEFAULT_FFMPEG, DEFAULT_FFPLAY};
use crate::core::DEFAULT_PREVIEW_SECS;

#[derive(Parser, Debug)]
#[command(name = "silentlovefilter")]
#[command(version, about = "SilentLoveFilter: audio denoising CLI powered by FFmpeg")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Verbose output (debug logging, full FFmpeg command line)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Denoise an audio file with customizable intensity
    Clean(CleanArgs),
    /// Play a short preview of an audio file
    Preview(PreviewArgs),
    /// List the available love levels
    Levels {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Input audio file
    pub input: PathBuf,

    /// Output audio file
    pub output: PathBuf,

    /// Denoising intensity, 1 (mild) to 5 (aggressive), or a level name
    #[arg(short = 'l', long, default_value_t = 3, allow_negative_numbers = true, value_parser = parse_love_level)]
    pub love_level: i64,

    /// Custom prefix for the output file name
    #[arg(short, long)]
    pub dedicate: Option<String>,

    /// Display a little ASCII love on completion
    #[arg(long, conflicts_with = "json")]
    pub kiss: bool,

    /// Overwrite an existing output without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Show an input/output comparison (size, sample rate, channels, duration)
    #[arg(long)]
    pub stats: bool,

    /// Print a JSON report instead of decorated output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Audio file to preview
    pub file: PathBuf,

    /// Duration of the preview in seconds
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_SECS as i64, allow_negative_numbers = true)]
    pub seconds: i64,
}

#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// FFmpeg executable used for denoising
    #[arg(long, env = "SILENTLOVE_FFMPEG", default_value = DEFAULT_FFMPEG, global = true)]
    pub ffmpeg: PathBuf,

    /// Player executable used for previews
    #[arg(long, env = "SILENTLOVE_FFPLAY", default_value = DEFAULT_FFPLAY, global = true)]
    pub ffplay: PathBuf,
}

/// Numbers pass through unchecked so `LoveLevel::new` reports the range error;
/// names such as `strong` map to their level.
fn parse_love_level(value: &str) -> Result<i64, String> {
    if let Ok(number) = value.parse::<i64>() {
        return Ok(number);
    }
    LoveLevel::from_name(value)
        .map(i64::from)
        .ok_or_else(|| format!("expected 1-5 or one of mild, gentle, balanced, strong, aggressive; got '{}'", value))
}

impl ToolArgs {
    pub fn settings(&self) -> ToolSettings {
        ToolSettings::default()
            .with_ffmpeg(&self.ffmpeg)
            .with_ffplay(&self.ffplay)
    }
}
