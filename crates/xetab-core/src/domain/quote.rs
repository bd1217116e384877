use serde::Serialize;

use crate::{CurrencyCode, RateDate, ValidationError};

/// Result of one successful rate fetch.
///
/// The currency and date fields always echo exactly what was requested; they
/// are never re-derived from the remote document. Immutable once built and
/// discarded after formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateQuote {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub date: RateDate,
    pub rate: f64,
}

impl RateQuote {
    pub fn new(
        from: CurrencyCode,
        to: CurrencyCode,
        date: RateDate,
        rate: f64,
    ) -> Result<Self, ValidationError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ValidationError::InvalidRate {
                value: rate.to_string(),
            });
        }

        Ok(Self {
            from,
            to,
            date,
            rate,
        })
    }

    /// Convert an amount denominated in `to` using the fetched rate.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn pair() -> (CurrencyCode, CurrencyCode, RateDate) {
        let from = CurrencyCode::parse("RUB").expect("valid");
        let to = CurrencyCode::parse("USD").expect("valid");
        let date = RateDate::normalize("2020-01-01", date!(2026 - 08 - 29)).expect("valid");
        (from, to, date)
    }

    #[test]
    fn builds_quote_echoing_requested_fields() {
        let (from, to, date) = pair();
        let quote = RateQuote::new(from, to, date, 61.906).expect("must build");
        assert_eq!(quote.from.as_str(), "RUB");
        assert_eq!(quote.to.as_str(), "USD");
        assert_eq!(quote.date.to_string(), "2020-01-01");
    }

    #[test]
    fn rejects_non_positive_rate() {
        let (from, to, date) = pair();
        for rate in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let err = RateQuote::new(from, to, date, rate).expect_err("must fail");
            assert!(matches!(err, ValidationError::InvalidRate { .. }));
        }
    }

    #[test]
    fn converts_amount_with_rate() {
        let (from, to, date) = pair();
        let quote = RateQuote::new(from, to, date, 2.5).expect("must build");
        assert_eq!(quote.convert(4.0), 10.0);
    }

    #[test]
    fn serializes_with_canonical_strings() {
        let (from, to, date) = pair();
        let quote = RateQuote::new(from, to, date, 61.906).expect("must build");
        let value = serde_json::to_value(quote).expect("must serialize");
        assert_eq!(value["from"], "RUB");
        assert_eq!(value["date"], "2020-01-01");
    }
}
