//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching time-series bar data from any market data vendor. Each concrete
//! provider implementation (currently Yahoo's chart API) handles its own wire
//! format and hands back [`RawBar`]s for the normalizer to clean up.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::RawBar, request_params::BarsRequest};

/// Trait for fetching time-series bar data from a market data provider.
///
/// Implementations own the transport and the vendor wire format; they return
/// rows in ascending timestamp order as delivered by the vendor and never
/// apply day filtering themselves.
#[async_trait]
pub trait DataProvider {
    /// Fetches raw bars for the given request parameters.
    ///
    /// An empty vector means the vendor had nothing for the window; the
    /// caller decides whether that is an error.
    async fn fetch_bars(&self, params: &BarsRequest) -> Result<Vec<RawBar>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init the reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error payload.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The response decoded, but its shape is not usable (e.g. mismatched
    /// column lengths).
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
