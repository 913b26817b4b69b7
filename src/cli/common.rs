//! Shared CLI plumbing: error type, exit codes and output helpers.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::config::{Config, OutputConfig};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid user input
    ValidationError = 1,
    /// File system, clipboard or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads output preferences, falling back to defaults on a broken config.
pub fn load_output_config() -> OutputConfig {
    match Config::load() {
        Ok(config) => config.output,
        Err(e) => {
            warn!("Ignoring unreadable configuration: {e:#}");
            OutputConfig::default()
        }
    }
}

/// Prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code.code(), 1);
        assert_eq!(CliError::io("disk").exit_code.code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CliError::validation("Invalid color").to_string(), "Invalid color");
    }
}
