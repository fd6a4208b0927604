//! Eastern-time conversion helpers.
//!
//! Everything downstream of the provider speaks US Eastern wall-clock time:
//! - [`utc_naive_to_eastern`]: interpret a naive timestamp as UTC, then shift
//!   to America/New_York.
//! - [`attach_eastern`]: attach the Eastern zone to a naive timestamp without
//!   shifting it. Fall-back ambiguity resolves to the earliest instant;
//!   spring-forward gaps are an error.
//! - [`eastern_day_bounds`]: the `[00:00, next-day 00:00)` window of a
//!   calendar day in Eastern time, as UTC instants for provider queries.
//!
//! Notes:
//! - Ambiguous local times happen during fall-back when a wall time occurs
//!   twice; nonexistent ones during spring-forward when a wall time is skipped.
//! - New York transitions at 02:00 local, so midnight itself is never inside a
//!   gap and the day-bounds computation stays total in practice.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, offset::LocalResult};
use chrono_tz::Tz;
use thiserror::Error;

/// The market calendar zone for every timestamp this crate emits.
pub const EASTERN: Tz = chrono_tz::America::New_York;

#[derive(Debug, Error)]
pub enum TzError {
    /// The wall time falls inside a spring-forward gap and names no instant.
    #[error("nonexistent local time in {zone}: {naive}")]
    NonexistentLocal { naive: NaiveDateTime, zone: Tz },

    /// The day after `date` is not representable.
    #[error("date out of range: {date}")]
    DateOverflow { date: NaiveDate },
}

/// Interprets a naive timestamp as UTC and converts it to Eastern time.
pub fn utc_naive_to_eastern(naive: NaiveDateTime) -> DateTime<Tz> {
    Utc.from_utc_datetime(&naive).with_timezone(&EASTERN)
}

/// Attaches the Eastern zone to a naive timestamp, preserving the wall clock.
///
/// Ambiguous fall-back times resolve to the earliest of the two instants so
/// the mapping stays deterministic.
pub fn attach_eastern(naive: NaiveDateTime) -> Result<DateTime<Tz>, TzError> {
    match EASTERN.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TzError::NonexistentLocal {
            naive,
            zone: EASTERN,
        }),
    }
}

/// The UTC instants bounding `date` in Eastern time: midnight of `date`
/// (inclusive) to midnight of the following day (exclusive).
pub fn eastern_day_bounds(date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>), TzError> {
    let next = date.succ_opt().ok_or(TzError::DateOverflow { date })?;
    let start = attach_eastern(date.and_time(NaiveTime::MIN))?;
    let end = attach_eastern(next.and_time(NaiveTime::MIN))?;
    Ok((start.with_timezone(&Utc), end.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn utc_naive_shifts_to_eastern_winter_offset() {
        // 2024-02-01 14:30Z is 09:30 EST (-05:00).
        let naive = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let east = utc_naive_to_eastern(naive);
        assert_eq!(east.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-02-01 09:30:00");
    }

    #[test]
    fn utc_naive_shifts_to_eastern_summer_offset() {
        // 2024-07-01 13:30Z is 09:30 EDT (-04:00).
        let naive = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let east = utc_naive_to_eastern(naive);
        assert_eq!(east.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-07-01 09:30:00");
    }

    #[test]
    fn attach_preserves_the_wall_clock() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);
        let east = attach_eastern(naive).unwrap();
        assert_eq!(east.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-02-01 00:00:00");
    }

    #[test]
    fn ny_spring_forward_gap_is_an_error() {
        // America/New_York jumps from 02:00 to 03:00 on 2024-03-10;
        // 02:30 local does not exist.
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert!(attach_eastern(naive).is_err());
    }

    #[test]
    fn ny_fall_back_ambiguity_resolves_to_the_earliest_instant() {
        // 2024-11-03 01:30 occurs twice; the earlier instant is 01:30 EDT -> 05:30Z.
        let naive = NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let got = attach_eastern(naive).unwrap().with_timezone(&Utc);
        let want = Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn day_bounds_cover_a_winter_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let (start, end) = eastern_day_bounds(date).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 1, 5, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 2, 5, 0, 0).unwrap());
    }

    #[test]
    fn day_bounds_span_23_hours_on_the_spring_forward_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = eastern_day_bounds(date).unwrap();
        assert_eq!((end - start).num_hours(), 23);
    }
}
