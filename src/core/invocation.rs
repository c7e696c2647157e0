// src/core/invocation.rs
//
// Maps a denoise request onto the FFmpeg command line.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

use super::request::DenoiseRequest;
use crate::error::{DenoiseError, Result};

/// A fully assembled external command: program plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Short tool name for messages, e.g. `ffmpeg` for `/usr/bin/ffmpeg`
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl std::fmt::Display for Invocation {
    /// Shell-like rendering for logs; arguments with spaces are quoted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Builds denoise invocations for a given FFmpeg executable
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    ffmpeg: PathBuf,
}

impl InvocationBuilder {
    pub fn new(ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
        }
    }

    /// `<ffmpeg> -y -i <input> -af <filter chain> <output>`
    ///
    /// Fails with `InputNotFound` when the input does not exist; nothing else
    /// touches the filesystem.
    pub fn build(&self, request: &DenoiseRequest) -> Result<Invocation> {
        if !request.input.exists() {
            return Err(DenoiseError::InputNotFound(request.input.clone()));
        }

        Ok(Invocation::new(&self.ffmpeg)
            .arg("-y")
            .arg("-i")
            .arg(&request.input)
            .arg("-af")
            .arg(request.filter_chain().ffmpeg_filter())
            .arg(&request.output))
    }
}
