//! In-memory representations of a time-series bar (OHLCV).
//!
//! [`RawBar`] is the boundary type every [`DataProvider`](crate::providers::DataProvider)
//! returns: timestamps may or may not carry timezone information, and field
//! values may arrive as bare scalars or single-element columns. [`NormalizedBar`]
//! is the cleaned, Eastern-time record the CLI serializes.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A field value as delivered by a provider: either a bare scalar or a
/// columnar wrapper that should hold exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<T> {
    Scalar(T),
    Column(Vec<T>),
}

/// A columnar value held more than one element where a scalar was required.
#[derive(Debug, Error)]
#[error("expected a scalar or a single-element column, got {len} elements")]
pub struct ValueShapeError {
    pub len: usize,
}

impl<T: Copy> RawValue<T> {
    /// Collapses the value to a scalar. Multi-element columns are rejected
    /// rather than silently truncated.
    pub fn into_scalar(self) -> Result<T, ValueShapeError> {
        match self {
            RawValue::Scalar(v) => Ok(v),
            RawValue::Column(values) if values.len() == 1 => Ok(values[0]),
            RawValue::Column(values) => Err(ValueShapeError { len: values.len() }),
        }
    }
}

/// A provider timestamp, tagged by whether it carries timezone information.
///
/// Aware timestamps are always UTC instants. Naive ones are interpreted by the
/// normalizer according to the requested interval (see
/// [`normalize`](crate::normalize::normalize)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTimestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<Utc>),
}

/// One row from the external data source, prior to normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBar {
    pub timestamp: RawTimestamp,
    pub open: RawValue<f64>,
    pub high: RawValue<f64>,
    pub low: RawValue<f64>,
    pub close: RawValue<f64>,
    pub volume: RawValue<u64>,
}

/// The public record: Eastern-time wall clock plus primitive OHLCV fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedBar {
    /// `YYYY-MM-DD HH:MM:SS` in America/New_York, no timezone suffix.
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
