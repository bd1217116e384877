mod cli;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;

use xetab_core::{PairDefaults, RatePipeline, RateRequest, ReqwestHttpClient};

use crate::cli::{Cli, OutputMode};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    if cli.output == OutputMode::Converted && cli.amount.is_none() {
        return Err(CliError::MissingAmount);
    }

    let pipeline = RatePipeline::new(Arc::new(ReqwestHttpClient::new()), PairDefaults::default())
        .with_timeout_ms(cli.timeout_ms);

    let request = RateRequest {
        from: Some(cli.from.clone()),
        to: Some(cli.to.clone()),
        date: cli.date.clone(),
    };

    let quote = pipeline.quote(&request).await?;
    output::render(&quote, cli.output, cli.amount)
}
