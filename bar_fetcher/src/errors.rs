use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    models::{bar::ValueShapeError, interval::Interval},
    providers::ProviderError,
    tz::TzError,
};

/// The unified data-level error for a fetch.
///
/// Every variant is reported as the `error` member of the JSON payload; none
/// of them affects the process exit status. Only argument and interval
/// validation (handled before a request exists) exit non-zero.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target date string failed strict `YYYY-MM-DD` parsing.
    #[error("Invalid date format. Please use YYYY-MM-DD format: {detail}")]
    InvalidDate { detail: String },

    /// The provider returned no rows at all for the query window.
    #[error("No data found for symbol: {symbol}, date: {date}, interval: {interval}")]
    NoData {
        symbol: String,
        date: NaiveDate,
        interval: Interval,
    },

    /// Rows came back, but none fell on the requested Eastern calendar day.
    #[error("No data found for symbol: {symbol}, date: {date} (ET), interval: {interval} after filtering")]
    NoDataAfterFilter {
        symbol: String,
        date: NaiveDate,
        interval: Interval,
    },

    /// A fault in the provider call; the upstream detail is the message.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A field arrived in a shape that cannot be coerced to a scalar.
    #[error("Unexpected value shape from provider: {0}")]
    ValueShape(#[from] ValueShapeError),

    /// A timestamp could not be mapped into Eastern time.
    #[error("Time zone conversion failed: {0}")]
    Tz(#[from] TzError),
}
