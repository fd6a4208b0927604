//! Yahoo Finance chart-API provider.
//!
//! Speaks the public `v8/finance/chart` endpoint: epoch-second timestamps with
//! columnar OHLCV arrays, no API key. Split into the usual triple:
//! [`params`] builds the query string, [`response`] models the wire format,
//! [`provider`] owns the HTTP client and the conversion to [`RawBar`]s.
//!
//! [`RawBar`]: crate::models::bar::RawBar

pub mod params;
pub mod provider;
pub mod response;

pub use params::YahooBarsParams;
pub use provider::YahooProvider;
