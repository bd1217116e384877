use xetab_core::RateQuote;

use crate::cli::OutputMode;
use crate::error::CliError;

/// Render a fetched quote in the requested form.
///
/// `Converted` assumes the amount was validated upstream; the amount is
/// denominated in the `to` currency and converted into `from` units.
pub fn render(quote: &RateQuote, mode: OutputMode, amount: Option<f64>) -> Result<(), CliError> {
    match mode {
        OutputMode::Full => {
            println!(
                "{} rate: {:.8} {} per 1 {}",
                quote.date, quote.rate, quote.from, quote.to
            );
        }
        OutputMode::Rate => {
            println!("{:.8}", quote.rate);
        }
        OutputMode::Converted => {
            let amount = amount.ok_or(CliError::MissingAmount)?;
            println!(
                "{amount} {} = {:.8} {}",
                quote.to,
                quote.convert(amount),
                quote.from
            );
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(quote)?);
        }
    }

    Ok(())
}
