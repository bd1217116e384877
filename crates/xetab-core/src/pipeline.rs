use std::sync::Arc;

use time::Date;

use crate::fetcher::RateFetcher;
use crate::http_client::HttpClient;
use crate::{CoreError, CurrencyCode, RateDate, RateQuote};

/// Currency pair used when the caller omits one side of the pair. Supplied
/// once at construction by the CLI layer; the pipeline never consults the
/// environment itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairDefaults {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl Default for PairDefaults {
    fn default() -> Self {
        Self {
            from: CurrencyCode::parse("RUB").expect("default code is in the supported set"),
            to: CurrencyCode::parse("USD").expect("default code is in the supported set"),
        }
    }
}

/// Raw request fields as supplied by the caller layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: String,
}

/// One-shot normalize → validate → fetch pipeline.
///
/// Strictly sequential; the single blocking operation is the HTTP round trip
/// inside the fetcher. Nothing here outlives the invocation.
pub struct RatePipeline {
    fetcher: RateFetcher,
    defaults: PairDefaults,
}

impl RatePipeline {
    pub fn new(client: Arc<dyn HttpClient>, defaults: PairDefaults) -> Self {
        Self {
            fetcher: RateFetcher::new(client),
            defaults,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.fetcher = self.fetcher.with_timeout_ms(timeout_ms);
        self
    }

    /// Resolve the request against today's UTC date.
    pub async fn quote(&self, request: &RateRequest) -> Result<RateQuote, CoreError> {
        self.quote_as_of(request, RateDate::today_utc()).await
    }

    /// Resolve the request against an explicit reference date. Used by tests
    /// to keep the future-date check deterministic.
    pub async fn quote_as_of(
        &self,
        request: &RateRequest,
        today: Date,
    ) -> Result<RateQuote, CoreError> {
        let date = RateDate::normalize(&request.date, today)?;

        let from = match &request.from {
            Some(raw) => CurrencyCode::parse(raw)?,
            None => self.defaults.from,
        };
        let to = match &request.to {
            Some(raw) => CurrencyCode::parse(raw)?,
            None => self.defaults.to,
        };

        let quote = self.fetcher.fetch(from, to, date).await?;
        Ok(quote)
    }
}
