//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (empty hex string)
//! - 12: input error (non-finite numeric argument)
//! - 13: serialization error

use colorext_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The color could not be decoded.
    Color(ColorError),
    /// A user input error (NaN or infinite channel, hue or alpha).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Formats the message written to stderr: `error: ...` text, or a JSON
    /// object carrying the message and exit code.
    pub fn report(&self, json: bool) -> String {
        if json {
            let body = serde_json::json!({"error": self.to_string(), "exit_code": self.exit_code()});
            serde_json::to_string_pretty(&body).unwrap_or_default()
        } else {
            format!("error: {self}")
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Color(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
