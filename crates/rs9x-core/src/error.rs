//! Error types for the rs9x platform layer

use std::path::PathBuf;
use thiserror::Error;

/// Fatal option-parsing failures. The binary maps every one of these to
/// exit code 2.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option --{0} requires a value")]
    MissingValue(&'static str),

    #[error("option --{0} does not take a value")]
    UnexpectedValue(&'static str),

    #[error("bad button name: {0}")]
    BadButtonName(String),

    #[error("bad action name: {0}")]
    BadActionName(String),

    #[error("cannot read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unterminated quote in config file {0}")]
    UnterminatedQuote(PathBuf),

    #[error("no ROM file specified")]
    NoRomSpecified,

    /// Not a failure: `--help` was given and the caller should print the
    /// option summary and exit cleanly.
    #[error("help requested")]
    HelpRequested,
}

/// Top-level error type for platform operations.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnknownOption("--frobnicate".into());
        assert_eq!(format!("{}", err), "unknown option: --frobnicate");

        let err = ConfigError::BadButtonName("C".into());
        assert_eq!(format!("{}", err), "bad button name: C");
    }

    #[test]
    fn test_error_conversion() {
        let err: PlatformError = ConfigError::NoRomSpecified.into();
        assert!(matches!(err, PlatformError::Config(_)));
    }
}
