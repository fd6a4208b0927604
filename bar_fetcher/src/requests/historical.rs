//! Single-request orchestration: derive the query window, fetch, normalize.

use tracing::{debug, info};

use crate::{
    errors::FetchError,
    models::{
        bar::NormalizedBar,
        request_params::{BarsRequest, FetchRequest, ProviderParams},
    },
    normalize::normalize,
    providers::DataProvider,
    tz,
};

/// Fetches one Eastern calendar day of bars for a request and normalizes the
/// result.
///
/// The provider is queried for the target date's midnight-to-midnight window
/// in Eastern time; any spill across the window edges is handled by the
/// normalizer's day filter, not here.
pub async fn fetch_day_bars(
    provider: &dyn DataProvider,
    request: &FetchRequest,
) -> Result<Vec<NormalizedBar>, FetchError> {
    let (start, end) = tz::eastern_day_bounds(request.date)?;

    let params = BarsRequest {
        symbol: request.symbol.clone(),
        interval: request.interval,
        start,
        end,
        provider_specific: ProviderParams::default(),
    };

    info!(
        symbol = %params.symbol,
        interval = %params.interval,
        date = %request.date,
        "fetching historical bars"
    );

    let rows = provider.fetch_bars(&params).await?;
    debug!(rows = rows.len(), "provider returned raw rows");

    normalize(rows, request)
}
