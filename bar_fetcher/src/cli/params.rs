use crate::models::interval::{Interval, IntervalParseError};

/// The usage line reported (as a JSON error object) when the argument list
/// does not parse.
pub const USAGE: &str = "Usage: bar_fetcher <symbol> <interval> <date>. \
    Example: bar_fetcher AAPL 1d 2024-02-01. \
    Intervals: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d. \
    Note: intraday data (intervals < 1d) is only available for the last 60 days";

/// Validates the interval token before any request is built.
pub fn parse_interval(raw: &str) -> Result<Interval, IntervalParseError> {
    raw.parse()
}
