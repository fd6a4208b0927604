use clap::Parser;

/// Fetch one day of OHLCV bars for a symbol and print them as JSON.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Ticker symbol (e.g. "AAPL"); case-insensitive.
    pub symbol: String,

    /// Bar interval: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h or 1d.
    ///
    /// Kept as a raw string so an invalid token can be reported as the JSON
    /// error object instead of a clap parse failure.
    pub interval: String,

    /// Target calendar date, YYYY-MM-DD (interpreted in US Eastern time).
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positional_arguments_parse() {
        let cli = Cli::try_parse_from(["bar_fetcher", "aapl", "5m", "2024-02-01"]).unwrap();
        assert_eq!(cli.symbol, "aapl");
        assert_eq!(cli.interval, "5m");
        assert_eq!(cli.date, "2024-02-01");
    }

    #[test]
    fn missing_or_extra_arguments_fail() {
        assert!(Cli::try_parse_from(["bar_fetcher", "AAPL", "5m"]).is_err());
        assert!(Cli::try_parse_from(["bar_fetcher", "AAPL", "5m", "2024-02-01", "x"]).is_err());
    }
}
