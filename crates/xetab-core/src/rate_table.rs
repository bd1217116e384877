//! Extraction of a single rate from the remote currency-table document.
//!
//! The source's markup is a hard external-compatibility risk, so the
//! structural lookup lives entirely in this module: a markup change touches
//! [`extract_rate`] and nothing else in the fetch path.

use scraper::{ElementRef, Html, Selector};

use crate::fetcher::FetchError;
use crate::CurrencyCode;

/// Structural path to the rate-table rows. One row per target currency; the
/// row's `th a` holds the currency code, its second `td` the decimal rate.
const TABLE_ROWS: &str = "div#table-section table tbody tr";
const ROW_CODE: &str = "th a";
const ROW_CELLS: &str = "td";

/// Scan the document for the row labelled `target` and parse its rate.
///
/// Returns `Ok(None)` when no row carries the target code, which the caller
/// classifies as "no quote for this date". The source guarantees at most one
/// row per code; if several appear, the first encountered wins.
pub fn extract_rate(document: &str, target: &CurrencyCode) -> Result<Option<f64>, FetchError> {
    let rows = Selector::parse(TABLE_ROWS).expect("static selector must parse");
    let code = Selector::parse(ROW_CODE).expect("static selector must parse");
    let cells = Selector::parse(ROW_CELLS).expect("static selector must parse");

    let html = Html::parse_document(document);

    for row in html.select(&rows) {
        let Some(label) = row.select(&code).next() else {
            continue;
        };
        if element_text(label) != target.as_str() {
            continue;
        }

        let Some(cell) = row.select(&cells).nth(1) else {
            return Err(FetchError::malformed_rate(format!(
                "row for '{target}' has no rate cell"
            )));
        };

        let text = element_text(cell);
        let rate = text.parse::<f64>().map_err(|_| {
            FetchError::malformed_rate(format!("rate '{text}' for '{target}' is not a number"))
        })?;

        return Ok(Some(rate));
    }

    Ok(None)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchErrorKind;

    fn table(rows: &str) -> String {
        format!(
            "<html><body><div id=\"table-section\"><section><div><div>\
             <table><tbody>{rows}</tbody></table>\
             </div></div></section></div></body></html>"
        )
    }

    fn usd() -> CurrencyCode {
        CurrencyCode::parse("USD").expect("valid")
    }

    #[test]
    fn extracts_rate_from_matching_row() {
        let html = table(
            "<tr><th><a href=\"/c/EUR\">EUR</a></th><td>Euro</td><td>0.014</td><td>71.2</td></tr>\
             <tr><th><a href=\"/c/USD\">USD</a></th><td>US Dollar</td><td>0.016</td><td>61.9</td></tr>",
        );
        let rate = extract_rate(&html, &usd()).expect("must extract");
        assert_eq!(rate, Some(0.016));
    }

    #[test]
    fn missing_row_yields_none() {
        let html = table("<tr><th><a>EUR</a></th><td>Euro</td><td>0.014</td></tr>");
        let rate = extract_rate(&html, &usd()).expect("must extract");
        assert_eq!(rate, None);
    }

    #[test]
    fn empty_document_yields_none() {
        let rate = extract_rate("<html><body></body></html>", &usd()).expect("must extract");
        assert_eq!(rate, None);
    }

    #[test]
    fn first_matching_row_wins() {
        let html = table(
            "<tr><th><a>USD</a></th><td>US Dollar</td><td>1.5</td></tr>\
             <tr><th><a>USD</a></th><td>US Dollar</td><td>9.9</td></tr>",
        );
        let rate = extract_rate(&html, &usd()).expect("must extract");
        assert_eq!(rate, Some(1.5));
    }

    #[test]
    fn unparseable_rate_is_malformed() {
        let html = table("<tr><th><a>USD</a></th><td>US Dollar</td><td>n/a</td></tr>");
        let err = extract_rate(&html, &usd()).expect_err("must fail");
        assert_eq!(err.kind(), FetchErrorKind::MalformedRate);
    }

    #[test]
    fn missing_rate_cell_is_malformed() {
        let html = table("<tr><th><a>USD</a></th><td>US Dollar</td></tr>");
        let err = extract_rate(&html, &usd()).expect_err("must fail");
        assert_eq!(err.kind(), FetchErrorKind::MalformedRate);
    }

    #[test]
    fn code_match_is_case_sensitive_against_uppercase() {
        let html = table("<tr><th><a>usd</a></th><td>US Dollar</td><td>1.0</td></tr>");
        let rate = extract_rate(&html, &usd()).expect("must extract");
        assert_eq!(rate, None);
    }
}
