#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_silentlovefilter"))
}

/// Binary with both tool variables pointing at the given stubs, so the
/// developer's real FFmpeg is never picked up.
pub fn run_silentlovefilter(ffmpeg: &Path, args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .env("SILENTLOVE_FFMPEG", ffmpeg)
        .env("SILENTLOVE_FFPLAY", ffmpeg)
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute silentlovefilter")
}

/// Same as `run_silentlovefilter` but feeds `answer` on stdin
pub fn run_with_stdin(ffmpeg: &Path, args: &[&str], answer: &str) -> Output {
    use std::io::Write;

    let mut child = Command::new(get_binary_path())
        .env("SILENTLOVE_FFMPEG", ffmpeg)
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn silentlovefilter");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(answer.as_bytes())
        .expect("Failed to write answer");

    child.wait_with_output().expect("Failed to wait for silentlovefilter")
}

/// Write an executable shell script into `dir`
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write stub script");
    let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod stub script");
    path
}

/// FFmpeg stand-in that copies the input (`$3`) to the output (`$6`) after
/// prefixing it with the filter string (`$5`), so runs are deterministic and
/// the level is visible in the result.
#[cfg(unix)]
pub fn copying_ffmpeg(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-ffmpeg",
        r#"[ "$1" = "-y" ] || exit 9
printf '%s\n' "$5" > "$6"
cat "$3" >> "$6"
echo "fake ffmpeg banner" >&2"#,
    )
}

/// FFmpeg stand-in that always fails with `boom` on stderr
#[cfg(unix)]
pub fn failing_ffmpeg(dir: &Path) -> PathBuf {
    write_script(dir, "broken-ffmpeg", "echo boom >&2\nexit 1")
}

/// FFmpeg stand-in that records its arguments, one per line, next to itself
#[cfg(unix)]
pub fn recording_ffmpeg(dir: &Path) -> PathBuf {
    let log = dir.join("invocations.log");
    write_script(
        dir,
        "recording-ffmpeg",
        &format!(
            "for a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\n: > \"$6\"",
            log.display()
        ),
    )
}

pub fn invocation_log(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join("invocations.log")).ok()
}

pub fn write_input(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0x5a_u8; len]).expect("Failed to write input fixture");
    path
}

/// Mono 16-bit tone that Symphonia can read back
pub fn write_wav(dir: &Path, name: &str, sample_rate: u32, seconds: f32) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV fixture");
    for i in 0..(sample_rate as f32 * seconds) as usize {
        let sample = ((i as f32 * 0.1).sin() * 3000.0) as i16;
        writer.write_sample(sample).expect("Failed to write WAV sample");
    }
    writer.finalize().expect("Failed to finalize WAV fixture");
    path
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
