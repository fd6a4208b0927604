//! Bar normalization: timezone mapping, day filtering, field coercion.
//!
//! [`normalize`] is a pure function from a provider's raw rows to the records
//! the CLI prints. It performs no I/O; fetching is the provider's job.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::{
    errors::FetchError,
    models::{
        bar::{NormalizedBar, RawBar, RawTimestamp},
        interval::Interval,
        request_params::FetchRequest,
    },
    tz,
};

/// Output timestamp pattern: 24-hour wall clock, no zone suffix (the offset is
/// implied to be US Eastern).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cleans a provider response into Eastern-time bars for the requested day.
///
/// Per-row handling:
/// - naive timestamp + daily interval: the date already names an Eastern
///   calendar day, so the zone is attached without shifting the clock;
/// - naive timestamp + intraday interval: interpreted as UTC, then converted;
/// - aware timestamp: converted to Eastern directly.
///
/// Intraday rows whose Eastern date is not the requested date are dropped (the
/// provider's query window is midnight-to-midnight and can overlap adjacent
/// days). Daily rows are never date-filtered.
///
/// An empty input and an input that empties out after filtering are distinct
/// errors, never an empty `data` list.
pub fn normalize(
    rows: Vec<RawBar>,
    request: &FetchRequest,
) -> Result<Vec<NormalizedBar>, FetchError> {
    if rows.is_empty() {
        return Err(FetchError::NoData {
            symbol: request.symbol.clone(),
            date: request.date,
            interval: request.interval,
        });
    }

    let mut bars = Vec::with_capacity(rows.len());
    for row in rows {
        let stamp: DateTime<Tz> = match row.timestamp {
            RawTimestamp::Naive(naive) if request.interval == Interval::Day1 => {
                tz::attach_eastern(naive)?
            }
            RawTimestamp::Naive(naive) => tz::utc_naive_to_eastern(naive),
            RawTimestamp::Aware(instant) => instant.with_timezone(&tz::EASTERN),
        };

        if request.interval.is_intraday() && stamp.date_naive() != request.date {
            continue;
        }

        bars.push(NormalizedBar {
            timestamp: stamp.format(TIMESTAMP_FORMAT).to_string(),
            open: row.open.into_scalar()?,
            high: row.high.into_scalar()?,
            low: row.low.into_scalar()?,
            close: row.close.into_scalar()?,
            volume: row.volume.into_scalar()?,
        });
    }

    if bars.is_empty() {
        return Err(FetchError::NoDataAfterFilter {
            symbol: request.symbol.clone(),
            date: request.date,
            interval: request.interval,
        });
    }

    Ok(bars)
}
