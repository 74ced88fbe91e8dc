use thiserror::Error;

/// Reasons an add-transaction request is turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("Amount must not be negative")]
    NegativeAmount,
}

/// Error type that captures tracker failures surfaced to callers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Config(err.to_string())
    }
}
