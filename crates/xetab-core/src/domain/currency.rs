use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::ValidationError;

/// Fixed allow-list of currency codes published by the rate-table source.
///
/// Kept sorted so membership checks can binary-search. Codes absent from this
/// table fail validation before any network request is made.
pub const SUPPORTED_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BDT", "BGN", "BHD", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK",
    "DKK", "DZD", "EGP", "EUR", "FJD", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "ISK", "JOD",
    "JPY", "KES", "KRW", "KWD", "KZT", "LKR", "MAD", "MXN", "MYR", "NGN", "NOK", "NZD", "OMR",
    "PEN", "PHP", "PKR", "PLN", "QAR", "RON", "RSD", "RUB", "SAR", "SEK", "SGD", "THB", "TND",
    "TRY", "TWD", "UAH", "USD", "UYU", "VND", "XAF", "XOF", "ZAR",
];

/// Validated 3-letter uppercase currency identifier.
///
/// Comparison is case-insensitive at the parse boundary; the stored value is
/// always the canonical uppercase entry from [`SUPPORTED_CODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// Parse and normalize a currency code against the supported set.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        match SUPPORTED_CODES.binary_search(&normalized.as_str()) {
            Ok(index) => Ok(Self(SUPPORTED_CODES[index])),
            Err(_) => Err(ValidationError::UnknownCurrency { code: normalized }),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}
