//! Configuration and command-line errors.

use thiserror::Error;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("intersection threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f32),

    #[error("tick rate must be at least 1ms")]
    ZeroTickRate,

    #[error("submit delay of {0}ms exceeds the 60000ms limit")]
    SubmitDelayTooLong(u64),
}

/// Invalid command-line usage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("flag {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
}
