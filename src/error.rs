use thiserror::Error;

use crate::config::DurationField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be a whole number of minutes, got {input:?}")]
    NotANumber { field: DurationField, input: String },
    #[error("{field} must be at least one minute")]
    NotPositive { field: DurationField },
    #[error("{field} of {input} minutes is too long")]
    TooLong { field: DurationField, input: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    #[error("expected MM:SS, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid number {0:?} in clock face")]
    InvalidNumber(String),
    #[error("seconds must be below 60, got {0}")]
    SecondsOutOfRange(u64),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}
