//! Error types shared by the denoise and preview paths

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, DenoiseError>;

/// Everything that can end a denoise or preview request.
///
/// All variants are terminal for the request that produced them; nothing in
/// this crate retries.
#[derive(Debug, thiserror::Error)]
pub enum DenoiseError {
    #[error("Love level {0} is out of range (expected 1-5)")]
    InvalidIntensity(i64),

    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("{tool} exited with {}", describe_status(.status))]
    ExternalToolFailure {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Could not start '{tool}' (is it installed and on PATH?)")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dedication '{0}' cannot be used in a file name")]
    InvalidDedication(String),

    #[error("Preview length must be at least 1 second, got {0}")]
    InvalidPreviewLength(i64),

    #[error("Could not read audio metadata: {0}")]
    Probe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DenoiseError {
    /// Captured diagnostic text of a failed external tool, if any.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            DenoiseError::ExternalToolFailure { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DenoiseError::InvalidIntensity(_)
            | DenoiseError::InvalidDedication(_)
            | DenoiseError::InvalidPreviewLength(_) => 2,
            _ => 1,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl From<symphonia::core::errors::Error> for DenoiseError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        DenoiseError::Probe(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failure_message() {
        let err = DenoiseError::ExternalToolFailure {
            tool: "ffmpeg".to_string(),
            status: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "ffmpeg exited with status 1");
        assert_eq!(err.diagnostics(), Some("boom"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_signal_termination_message() {
        let err = DenoiseError::ExternalToolFailure {
            tool: "ffmpeg".to_string(),
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_invalid_intensity_exit_code() {
        let err = DenoiseError::InvalidIntensity(9);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains('9'));
        assert!(err.diagnostics().is_none());
    }
}
