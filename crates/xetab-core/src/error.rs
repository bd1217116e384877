use thiserror::Error;

use crate::fetcher::FetchError;

/// Validation and contract errors exposed by `xetab-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date '{input}' does not match YYYY-MM-DD, YY-MM-DD, or their undelimited forms")]
    DateMalformed { input: String },
    #[error("date '{input}' is not a real calendar date")]
    DateImpossible { input: String },
    #[error("date '{date}' is after today ({today})")]
    DateInFuture { date: String, today: String },

    #[error("currency '{code}' is not in the supported code set")]
    UnknownCurrency { code: String },

    #[error("rate must be a positive finite number: '{value}'")]
    InvalidRate { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
