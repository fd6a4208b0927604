use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use bar_fetcher::{
    cli::{
        commands::Cli,
        params::{USAGE, parse_interval},
    },
    fetch_day_bars, logging,
    models::{fetch_result::FetchResult, interval::Interval, request_params::FetchRequest},
    providers::{ProviderError, yahoo::YahooProvider},
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            // --help/--version keep clap's conventional output.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print_json(&FetchResult::Error(USAGE.to_string()));
            return ExitCode::FAILURE;
        }
    };

    // Interval validation happens before any fetch is attempted; a bad token
    // is the one data-shaped error that exits non-zero.
    let interval = match parse_interval(&cli.interval) {
        Ok(interval) => interval,
        Err(err) => {
            print_json(&FetchResult::Error(err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let result = run(&cli.symbol, interval, &cli.date).await;
    print_json(&result);

    // Fetch and normalization failures are already embedded in the payload;
    // the process itself exits normally for them.
    ExitCode::SUCCESS
}

async fn run(symbol: &str, interval: Interval, date: &str) -> FetchResult {
    let outcome = async {
        let request = FetchRequest::new(symbol, interval, date)?;
        let provider = YahooProvider::new().map_err(ProviderError::from)?;
        fetch_day_bars(&provider, &request).await
    }
    .await;

    FetchResult::from(outcome)
}

fn print_json(result: &FetchResult) {
    match serde_json::to_string_pretty(result) {
        Ok(payload) => println!("{payload}"),
        Err(err) => println!("{{\"error\": \"failed to serialize result: {err}\"}}"),
    }
}
