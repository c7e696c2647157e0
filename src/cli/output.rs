//! Output formatting for CLI results

use chrono::{DateTime, Local};
use colorful::Colorful;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{FilterChain, LoveLevel};
use crate::core::{probe_audio, AudioInfo, DenoiseRequest, InvocationResult, InvocationState};

pub const KISSES: [&str; 3] = ["😘 xoxo", "💋 <3", "❤️ Mwah!"];

/// One of the completion kisses, picked at random
pub fn random_kiss<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    KISSES.choose(rng).copied().unwrap_or(KISSES[0])
}

pub fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Table of the love levels for `levels`
pub fn format_levels() -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n\n", "Available love levels:".bold()));

    for level in LoveLevel::all() {
        let marker = if level == LoveLevel::default() { " (default)" } else { "" };
        output.push_str(&format!(
            "  {} {:<10} nf={:>3} dB  {}{}\n",
            level.value().to_string().magenta(),
            level.name(),
            level.noise_floor(),
            level.description(),
            marker
        ));
    }

    output
}

#[derive(Debug, Serialize)]
struct LevelEntry {
    level: LoveLevel,
    name: &'static str,
    description: &'static str,
    noise_floor_db: i32,
    filter: String,
}

pub fn format_levels_json() -> serde_json::Result<String> {
    let entries: Vec<LevelEntry> = LoveLevel::all()
        .into_iter()
        .map(|level| LevelEntry {
            level,
            name: level.name(),
            description: level.description(),
            noise_floor_db: level.noise_floor(),
            filter: level.filter_chain().ffmpeg_filter(),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Size of one file plus its audio properties when Symphonia can read it
#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub audio: Option<AudioInfo>,
}

impl FileStats {
    pub fn collect(path: &Path) -> io::Result<Self> {
        let size_bytes = fs::metadata(path)?.len();
        let audio = match probe_audio(path) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!("No audio details for {}: {}", path.display(), e);
                None
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            size_bytes,
            audio,
        })
    }

    pub fn size_kb(&self) -> f64 {
        self.audio.as_ref().map_or_else(|| kb(self.size_bytes), AudioInfo::size_kb)
    }

    fn audio_cell(&self, render: impl Fn(&AudioInfo) -> String) -> String {
        self.audio.as_ref().map_or_else(|| "-".to_string(), render)
    }
}

/// Input and output side by side, for `--stats`
#[derive(Debug, Clone, Serialize)]
pub struct CleanStats {
    pub input: FileStats,
    pub output: FileStats,
}

impl CleanStats {
    pub fn collect(request: &DenoiseRequest) -> io::Result<Self> {
        Ok(Self {
            input: FileStats::collect(&request.input)?,
            output: FileStats::collect(&request.output)?,
        })
    }
}

/// "Audio Stats" comparison table; unreadable audio shows as "-"
pub fn format_stats(stats: &CleanStats) -> String {
    let (input, output) = (&stats.input, &stats.output);
    let rows = [
        ("File Size (KB)", format!("{:.2}", input.size_kb()), format!("{:.2}", output.size_kb())),
        (
            "Sample Rate (Hz)",
            input.audio_cell(|a| a.sample_rate.to_string()),
            output.audio_cell(|a| a.sample_rate.to_string()),
        ),
        (
            "Channels",
            input.audio_cell(|a| a.channels.to_string()),
            output.audio_cell(|a| a.channels.to_string()),
        ),
        (
            "Duration (s)",
            input.audio_cell(|a| format!("{:.2}", a.duration_secs)),
            output.audio_cell(|a| format!("{:.2}", a.duration_secs)),
        ),
    ];

    let width = rows
        .iter()
        .map(|(_, i, o)| i.len().max(o.len()))
        .max()
        .unwrap_or(0)
        .max("Output".len());

    let mut table = String::new();
    table.push_str(&format!("{}\n", "Audio Stats".bold()));
    table.push_str(&format!(
        "  {:<16} {:>w$}  {:>w$}\n",
        "Metric",
        "Input",
        "Output",
        w = width
    ));
    for (metric, input_cell, output_cell) in &rows {
        table.push_str(&format!(
            "  {:<16} {}  {}\n",
            metric,
            format!("{:>w$}", input_cell, w = width).magenta(),
            format!("{:>w$}", output_cell, w = width).green()
        ));
    }
    table.push_str(&format!(
        "  {}\n",
        format!("{} -> {}", input.path.display(), output.path.display()).cyan()
    ));
    table
}

/// Machine-readable summary of a `clean` run
#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub love_level: LoveLevel,
    pub level_name: &'static str,
    pub filter: FilterChain,
    pub command: String,
    pub state: InvocationState,
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    pub elapsed_ms: u128,
    pub finished_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CleanStats>,
}

impl CleanReport {
    pub fn new(request: &DenoiseRequest, command: String, result: &InvocationResult) -> Self {
        let failed = result.state() == InvocationState::Failed;
        Self {
            input: request.input.clone(),
            output: request.output.clone(),
            love_level: request.level,
            level_name: request.level.name(),
            filter: request.filter_chain(),
            command,
            state: result.state(),
            status: result.status(),
            output_size_bytes: result.output_size(),
            stderr: failed.then(|| result.stderr().to_string()),
            elapsed_ms: result.elapsed().as_millis(),
            finished_at: Local::now(),
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: Option<CleanStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessOutput;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_random_kiss_is_from_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(KISSES.contains(&random_kiss(&mut rng)));
        }
    }

    #[test]
    fn test_format_levels() {
        let text = format_levels();
        for name in ["mild", "gentle", "balanced", "strong", "aggressive"] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("nf=-30 dB"));
        assert!(text.contains("(default)"));
    }

    #[test]
    fn test_levels_json() {
        let json = format_levels_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[2]["level"], 3);
        assert_eq!(entries[2]["noise_floor_db"], -20);
        assert_eq!(entries[2]["filter"], "highpass=f=80,lowpass=f=4000,afftdn=nf=-20");
    }

    fn write_tone_wav(path: &Path, sample_rate: u32, channels: u16, seconds: f32) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        let frames = (sample_rate as f32 * seconds) as usize;
        for i in 0..frames {
            let s = ((i as f32 * 0.05).sin() * 4000.0) as i16;
            for _ in 0..channels {
                writer.write_sample(s).unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    fn row<'a>(table: &'a str, metric: &str) -> &'a str {
        table.lines().find(|l| l.contains(metric)).unwrap()
    }

    #[test]
    fn test_format_stats_without_audio() {
        let stats = CleanStats {
            input: FileStats { path: PathBuf::from("in.wav"), size_bytes: 2048, audio: None },
            output: FileStats { path: PathBuf::from("out.wav"), size_bytes: 1536, audio: None },
        };
        let table = format_stats(&stats);
        assert!(table.contains("Audio Stats"));
        assert!(row(&table, "File Size (KB)").contains("2.00"));
        assert!(row(&table, "File Size (KB)").contains("1.50"));
        assert_eq!(row(&table, "Channels").matches('-').count(), 2);
        assert!(table.contains("in.wav -> out.wav"));
    }

    #[test]
    fn test_stats_read_wav_details() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        write_tone_wav(&input, 22050, 2, 1.5);
        let output = dir.path().join("out.wav");
        fs::write(&output, b"not audio at all").unwrap();

        let request = DenoiseRequest::new(&input, &output, 3).unwrap();
        let stats = CleanStats::collect(&request).unwrap();

        let audio = stats.input.audio.as_ref().unwrap();
        assert_eq!(audio.sample_rate, 22050);
        assert_eq!(stats.input.size_kb(), audio.size_kb());
        assert!(stats.output.audio.is_none());
        assert_eq!(stats.output.size_bytes, 16);

        let table = format_stats(&stats);
        assert!(row(&table, "Sample Rate (Hz)").contains("22050"));
        assert!(row(&table, "Channels").contains(" 2"));
        assert!(row(&table, "Duration (s)").contains("1.50"));
        assert!(row(&table, "Duration (s)").contains('-'));
    }

    #[test]
    fn test_stats_missing_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        fs::write(&input, b"x").unwrap();
        let request = DenoiseRequest::new(&input, dir.path().join("gone.wav"), 3).unwrap();
        assert!(CleanStats::collect(&request).is_err());
    }

    #[test]
    fn test_clean_report_json() {
        let request = DenoiseRequest::new("a.wav", "b.wav", 3).unwrap();
        let result = InvocationResult::new(
            "ffmpeg",
            ProcessOutput { status: Some(1), stdout: String::new(), stderr: "boom".to_string() },
            None,
            Duration::from_millis(12),
        );
        let report = CleanReport::new(&request, "ffmpeg -y".to_string(), &result);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["state"], "failed");
        assert_eq!(value["stderr"], "boom");
        assert_eq!(value["love_level"], 3);
        assert_eq!(value["filter"]["noise_floor_db"], -20);
        assert_eq!(value["elapsed_ms"], 12);
        assert!(value.get("output_size_bytes").is_none());
        assert!(value.get("stats").is_none());
    }
}
