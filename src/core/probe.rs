// src/core/probe.rs
//
// Container metadata lookup via Symphonia. Used for previews and the stats
// table; the denoise path itself never decodes audio.

use serde::Serialize;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{DenoiseError, Result};

/// Basic facts about an audio file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub codec_name: String,
}

impl AudioInfo {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Read sample rate, channel count and duration of `path`.
///
/// Duration comes from the container's frame count when present; otherwise
/// the stream is decoded once to count frames.
pub fn probe_audio(path: &Path) -> Result<AudioInfo> {
    if !path.exists() {
        return Err(DenoiseError::InputNotFound(path.to_path_buf()));
    }

    let size_bytes = std::fs::metadata(path)?.len();
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| DenoiseError::Probe(format!("unsupported or corrupt file: {}", e)))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| DenoiseError::Probe("no supported audio track".to_string()))?;

    let track_id = track.id;
    let params = track.codec_params.clone();

    let sample_rate = params
        .sample_rate
        .ok_or_else(|| DenoiseError::Probe("file does not specify sample rate".to_string()))?;
    let channels = params.channels.map(|c| c.count()).unwrap_or(2);
    let codec_name = symphonia::default::get_codecs()
        .get_codec(params.codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| format!("{:?}", params.codec));

    let frames = match params.n_frames {
        Some(n) => n,
        None => count_frames(probed.format.as_mut(), track_id, &params)?,
    };

    Ok(AudioInfo {
        path: path.to_path_buf(),
        size_bytes,
        sample_rate,
        channels,
        duration_secs: frames as f64 / sample_rate as f64,
        codec_name,
    })
}

fn count_frames(
    format: &mut dyn FormatReader,
    track_id: u32,
    params: &symphonia::core::codecs::CodecParameters,
) -> Result<u64> {
    let mut decoder = symphonia::default::get_codecs().make(params, &DecoderOptions::default())?;
    let mut frames = 0u64;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(buf) => frames += buf.frames() as u64,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(frames)
}
