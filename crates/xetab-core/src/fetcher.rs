use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest};
use crate::rate_table::extract_rate;
use crate::{CurrencyCode, RateDate, RateQuote};

/// Base URL of the remote currency-table source.
pub const RATE_TABLE_URL: &str = "https://www.xe.com/currencytables/";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Fetch-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The document could not be retrieved at all.
    Transport,
    /// Document retrieved, but no row for the target currency. Typical for
    /// dates before the source's coverage or days without a published table.
    NoQuoteForDate,
    /// Matching row found, but its rate field is not a usable number.
    MalformedRate,
}

/// Structured fetch error returned to the caller. Retry policy, if any,
/// belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn no_quote_for_date(to: CurrencyCode, date: RateDate) -> Self {
        Self {
            kind: FetchErrorKind::NoQuoteForDate,
            message: format!("no published rate for '{to}' on {date}"),
            retryable: false,
        }
    }

    pub fn malformed_rate(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::MalformedRate,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::NoQuoteForDate => "fetch.no_quote_for_date",
            FetchErrorKind::MalformedRate => "fetch.malformed_rate",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Retrieves the rate table for one currency/date and extracts a single row.
///
/// One outbound request per call; no retries; the response body is owned by
/// the call and dropped on every exit path.
pub struct RateFetcher {
    client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl RateFetcher {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fetch the rate for `from` → `to` on `date`.
    ///
    /// The returned quote echoes exactly the requested pair and date.
    pub async fn fetch(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        date: RateDate,
    ) -> Result<RateQuote, FetchError> {
        let request = HttpRequest::get(table_url(from, date)).with_timeout_ms(self.timeout_ms);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        if !response.is_success() {
            return Err(FetchError::transport(format!(
                "rate table request returned status {}",
                response.status
            )));
        }

        match extract_rate(&response.body, &to)? {
            Some(rate) => RateQuote::new(from, to, date, rate)
                .map_err(|e| FetchError::malformed_rate(e.to_string())),
            None => Err(FetchError::no_quote_for_date(to, date)),
        }
    }
}

fn table_url(from: CurrencyCode, date: RateDate) -> String {
    format!(
        "{RATE_TABLE_URL}?from={}&date={}",
        urlencoding::encode(from.as_str()),
        urlencoding::encode(&date.to_string())
    )
}
