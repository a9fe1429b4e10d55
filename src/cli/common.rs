//! Shared CLI error and exit code handling.

use crate::config::Config;
use crate::error::KnitoutError;
use std::fmt;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad flag value, out-of-range extension, ...)
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Kind of CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid user input
    Validation,
    /// File system failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// What went wrong
    pub kind: CliErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<KnitoutError> for CliError {
    fn from(err: KnitoutError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Splits a `KEY=VALUE` argument.
pub fn parse_key_value(arg: &str) -> CliResult<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| CliError::validation(format!("Expected KEY=VALUE, got '{arg}'")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::validation(format!("Missing key in '{arg}'")));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

/// Loads the user configuration.
///
/// Read failures map to [`ExitCode::IoError`]; a file that does not parse or
/// validate maps to [`ExitCode::ValidationError`].
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(config_load_error)
}

fn config_load_error(err: anyhow::Error) -> CliError {
    let message = format!("Failed to load configuration: {err:#}");
    if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        CliError::io(message)
    } else {
        CliError::validation(message)
    }
}

/// Prints `text` to stdout, or writes it to `path` when given.
pub fn emit(text: &str, path: Option<&std::path::Path>) -> CliResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| {
                CliError::io(format!("Failed to write {}: {e}", path.display()))
            })?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("1=50-50 Rust").unwrap(),
            ("1".to_string(), "50-50 Rust".to_string())
        );
        assert_eq!(
            parse_key_value("Yarn=100:0 Magic=Blonde").unwrap(),
            ("Yarn".to_string(), "100:0 Magic=Blonde".to_string())
        );
        assert!(parse_key_value("no separator").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(CliError::validation("x").exit_code()), 1);
        assert_eq!(i32::from(CliError::io("x").exit_code()), 2);
        assert_eq!(i32::from(ExitCode::Success), 0);
    }

    #[test]
    fn test_knitout_error_is_validation() {
        let err: CliError = crate::extensions::encode_speed_number(99).unwrap_err().into();
        assert_eq!(err.kind, CliErrorKind::Validation);
        assert!(err.message.contains("99"));
    }

    #[test]
    fn test_config_load_error_kinds() {
        let read_failure = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))
        .context("Failed to read config file: config.toml");
        assert_eq!(config_load_error(read_failure).kind, CliErrorKind::Io);

        let bad_position = anyhow::Error::new(
            "middle".parse::<crate::models::StartPosition>().unwrap_err(),
        )
        .context("Invalid position in configuration");
        let err = config_load_error(bad_position);
        assert_eq!(err.kind, CliErrorKind::Validation);
        assert!(err.message.contains("middle"));

        let parse_failure = toml::from_str::<Config>("[output\n").unwrap_err();
        let err = config_load_error(anyhow::Error::new(parse_failure).context("Failed to parse"));
        assert_eq!(err.kind, CliErrorKind::Validation);
    }
}
