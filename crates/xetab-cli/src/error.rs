use thiserror::Error;

use xetab_core::{CoreError, FetchError, FetchErrorKind, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("--output converted requires --amount")]
    MissingAmount,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(e) => Self::Validation(e),
            CoreError::Fetch(e) => Self::Fetch(e),
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::MissingAmount => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::Transport => 4,
                FetchErrorKind::NoQuoteForDate | FetchErrorKind::MalformedRate => 3,
            },
            Self::Serialization(_) => 10,
        }
    }
}
