//! CLI argument definitions for xetab.
//!
//! The date argument accepts `YYYY-MM-DD` as well as `.` and `/` delimiters,
//! two-digit years, and fully concatenated digit forms; normalization and
//! validation happen in `xetab-core`.

use clap::{Parser, ValueEnum};

/// Fetch the exchange rate for a currency pair on a calendar date.
#[derive(Debug, Parser)]
#[command(
    name = "xetab",
    author,
    version,
    about = "Fetch a historical FX rate for a currency pair"
)]
pub struct Cli {
    /// Date to fetch the rate for (YYYY-MM-DD; also accepts `.`, `/`,
    /// two-digit years, and undelimited digits).
    pub date: String,

    /// Currency to convert from.
    #[arg(short, long, default_value = "RUB")]
    pub from: String,

    /// Currency to convert to.
    #[arg(short, long, default_value = "USD")]
    pub to: String,

    /// Amount to convert with the fetched rate (required by `--output converted`).
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// Output form.
    #[arg(long, value_enum, default_value_t = OutputMode::Full)]
    pub output: OutputMode,

    /// Request timeout budget in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}

/// Output form options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Full sentence including date and pair.
    Full,
    /// Bare rate only.
    Rate,
    /// Converted amount (requires --amount).
    Converted,
    /// Quote serialized as JSON.
    Json,
}
