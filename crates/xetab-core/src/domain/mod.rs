//! Canonical value types shared across the pipeline.

mod currency;
mod date;
mod quote;

pub use currency::{CurrencyCode, SUPPORTED_CODES};
pub use date::RateDate;
pub use quote::RateQuote;
