// Shared fixtures for pipeline behavior tests
pub use xetab_core::{
    CoreError, CurrencyCode, FetchErrorKind, PairDefaults, RateDate, RateFetcher, RatePipeline,
    RateQuote, RateRequest, StaticHttpClient, ValidationError,
};

/// Minimal currency-table document with the given rows inside the structural
/// path the extractor expects.
pub fn currency_table(rows: &str) -> String {
    format!(
        "<html><body><div id=\"table-section\"><section><div><div>\
         <table><thead><tr><th>Currency</th><th>Name</th><th>Units</th><th>Per unit</th></tr></thead>\
         <tbody>{rows}</tbody></table>\
         </div></div></section></div></body></html>"
    )
}

pub fn rate_row(code: &str, name: &str, rate: &str) -> String {
    format!(
        "<tr><th><a href=\"/currency/{code}\">{code}</a></th>\
         <td>{name}</td><td>{rate}</td><td>1.0</td></tr>"
    )
}
