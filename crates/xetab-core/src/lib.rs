//! Core pipeline for xetab.
//!
//! This crate contains:
//! - Canonical domain values and validation (currency codes, calendar dates)
//! - The rate fetcher and its single-row table extraction
//! - HTTP transport trait/adapters
//! - The normalize → validate → fetch pipeline and structured errors

pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod pipeline;
pub mod rate_table;

pub use domain::{CurrencyCode, RateDate, RateQuote, SUPPORTED_CODES};
pub use error::{CoreError, ValidationError};
pub use fetcher::{FetchError, FetchErrorKind, RateFetcher, RATE_TABLE_URL};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
pub use pipeline::{PairDefaults, RatePipeline, RateRequest};
