use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::FetchError, models::interval::Interval, providers::yahoo::YahooBarsParams};

/// A validated fetch request as it arrives from the command line: one symbol,
/// one interval, one calendar date.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Ticker symbol, uppercased (e.g. `"AAPL"`).
    pub symbol: String,

    /// The bar granularity to request.
    pub interval: Interval,

    /// The target calendar day, interpreted in US Eastern time.
    pub date: NaiveDate,
}

impl FetchRequest {
    /// Builds a request from raw CLI strings.
    ///
    /// The symbol is case-normalized; the date must match strict `YYYY-MM-DD`
    /// and name a real calendar day. The interval is assumed to be validated
    /// already (interval validation happens before any request is built).
    pub fn new(symbol: &str, interval: Interval, date: &str) -> Result<Self, FetchError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            FetchError::InvalidDate {
                detail: e.to_string(),
            }
        })?;

        Ok(Self {
            symbol: symbol.to_uppercase(),
            interval,
            date,
        })
    }
}

/// Universal parameters for requesting bar data from a market data provider.
///
/// The time range is expressed as UTC instants so that providers never have to
/// reason about the target calendar day; callers derive the range with
/// [`eastern_day_bounds`](crate::tz::eastern_day_bounds).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequest {
    /// The symbol to request (e.g. `"AAPL"`).
    pub symbol: String,

    /// The time interval for each bar.
    pub interval: Interval,

    /// Start of the requested range (inclusive, UTC).
    pub start: DateTime<Utc>,

    /// End of the requested range (exclusive, UTC).
    pub end: DateTime<Utc>,

    /// Optional, provider-specific parameters.
    #[serde(default)]
    pub provider_specific: ProviderParams,
}

/// An enum to hold provider-specific request parameters, so per-vendor knobs
/// don't leak into the universal `BarsRequest`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ProviderParams {
    #[default]
    None,
    Yahoo(YahooBarsParams),
}
