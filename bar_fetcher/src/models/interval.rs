use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The interval tokens accepted on the command line, in display order.
pub const VALID_INTERVALS: [&str; 9] = ["1m", "2m", "5m", "15m", "30m", "60m", "90m", "1h", "1d"];

#[derive(Debug, Error)]
#[error("Invalid interval. Must be one of: {}", VALID_INTERVALS.join(", "))]
pub struct IntervalParseError {
    pub input: String,
}

/// Bar granularity for a fetch request.
///
/// This is a closed set: the upstream chart API only serves these tokens, and
/// anything else is rejected before a request is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Min1,
    #[serde(rename = "2m")]
    Min2,
    #[serde(rename = "5m")]
    Min5,
    #[serde(rename = "15m")]
    Min15,
    #[serde(rename = "30m")]
    Min30,
    #[serde(rename = "60m")]
    Min60,
    #[serde(rename = "90m")]
    Min90,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "1d")]
    Day1,
}

impl Interval {
    /// The wire token, identical to the CLI spelling (e.g. `"5m"`, `"1d"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Interval::Min1 => "1m",
            Interval::Min2 => "2m",
            Interval::Min5 => "5m",
            Interval::Min15 => "15m",
            Interval::Min30 => "30m",
            Interval::Min60 => "60m",
            Interval::Min90 => "90m",
            Interval::Hour1 => "1h",
            Interval::Day1 => "1d",
        }
    }

    /// True for every interval finer than one day. Intraday bars are
    /// date-filtered after timezone conversion; daily bars are not.
    pub const fn is_intraday(self) -> bool {
        !matches!(self, Interval::Day1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::Min1),
            "2m" => Ok(Interval::Min2),
            "5m" => Ok(Interval::Min5),
            "15m" => Ok(Interval::Min15),
            "30m" => Ok(Interval::Min30),
            "60m" => Ok(Interval::Min60),
            "90m" => Ok(Interval::Min90),
            "1h" => Ok(Interval::Hour1),
            "1d" => Ok(Interval::Day1),
            other => Err(IntervalParseError {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_token_round_trips() {
        for token in VALID_INTERVALS {
            let interval: Interval = token.parse().unwrap();
            assert_eq!(interval.as_str(), token);
        }
    }

    #[test]
    fn only_the_daily_interval_is_not_intraday() {
        for token in VALID_INTERVALS {
            let interval: Interval = token.parse().unwrap();
            assert_eq!(interval.is_intraday(), token != "1d");
        }
    }

    #[test]
    fn unknown_tokens_are_rejected_with_the_full_list() {
        let err = "3m".parse::<Interval>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid interval. Must be one of: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d"
        );
    }

    #[test]
    fn case_and_whitespace_are_not_forgiven() {
        assert!("1M".parse::<Interval>().is_err());
        assert!(" 1m".parse::<Interval>().is_err());
    }
}
