use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use reqwest::Client;
use shared_utils::env::get_env_var_or;
use snafu::{IntoError, OptionExt, ResultExt, ensure};
use tracing::debug;

use crate::{
    models::{
        bar::{RawBar, RawTimestamp, RawValue},
        interval::Interval,
        request_params::BarsRequest,
    },
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InitSnafu, InternalSnafu, ProviderError,
        ProviderInitError, ReqwestSnafu,
        yahoo::{
            params::{YahooBarsParams, construct_params},
            response::{ChartResponse, ChartResult},
        },
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Name of the environment variable overriding [`BASE_URL`], e.g. to point at
/// the query2 mirror or a local stub.
const BASE_URL_ENV: &str = "YF_CHART_BASE_URL";

/// Yahoo rejects requests without a browser-ish user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Creates a new Yahoo chart-API provider.
    ///
    /// No credentials are involved; the endpoint is public. The base URL can
    /// be overridden through `YF_CHART_BASE_URL`.
    pub fn new() -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: get_env_var_or(BASE_URL_ENV, BASE_URL),
        })
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(&self, params: &BarsRequest) -> Result<Vec<RawBar>, ProviderError> {
        let yahoo_params = YahooBarsParams::for_request(params);
        let url = format!("{}/{}", self.base_url, params.symbol);
        let query = construct_params(params, &yahoo_params);

        debug!(symbol = %params.symbol, interval = %params.interval, %url, "requesting chart data");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        let chart: ChartResponse = response.json().await.context(ReqwestSnafu)?;

        if let Some(err) = chart.chart.error {
            return ApiSnafu {
                message: format!("{}: {}", err.code, err.description),
            }
            .fail();
        }

        let result = match chart.chart.result.into_iter().flatten().next() {
            Some(result) => result,
            // A well-formed response with no result set: nothing traded in
            // the window. The caller turns this into its no-data error.
            None => return Ok(Vec::new()),
        };

        rows_from_chart(result, params.interval, yahoo_params.auto_adjust)
    }
}

/// Converts one chart result into raw bars.
///
/// Daily bars become naive, date-only timestamps on the exchange's local
/// calendar (derived from `meta.gmtoffset`), matching how daily data is
/// conventionally presented. Intraday bars stay aware UTC instants. Indices
/// where any column is `null` are skipped.
fn rows_from_chart(
    result: ChartResult,
    interval: Interval,
    auto_adjust: bool,
) -> Result<Vec<RawBar>, ProviderError> {
    let quote = match result.indicators.quote.into_iter().next() {
        Some(quote) => quote,
        None => return Ok(Vec::new()),
    };

    let n = result.timestamp.len();
    ensure!(
        quote.open.len() == n
            && quote.high.len() == n
            && quote.low.len() == n
            && quote.close.len() == n
            && quote.volume.len() == n,
        InternalSnafu {
            message: format!(
                "quote columns do not match {n} timestamps for {}",
                result.meta.symbol
            ),
        }
    );

    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose);

    let exchange_offset = FixedOffset::east_opt(result.meta.gmtoffset as i32).context(
        InternalSnafu {
            message: format!("invalid gmtoffset {}", result.meta.gmtoffset),
        },
    )?;

    let mut rows = Vec::with_capacity(n);
    for (i, &secs) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
            quote.open[i],
            quote.high[i],
            quote.low[i],
            quote.close[i],
            quote.volume[i],
        ) else {
            continue;
        };

        let instant = DateTime::<Utc>::from_timestamp(secs, 0).context(InternalSnafu {
            message: format!("timestamp out of range: {secs}"),
        })?;

        // Adjusted close / close rescales the whole row; a missing adjclose
        // column (intraday) leaves prices as-is.
        let factor = if auto_adjust {
            adjclose
                .as_ref()
                .and_then(|column| column.get(i).copied().flatten())
                .map_or(1.0, |adj| adj / close)
        } else {
            1.0
        };

        let timestamp = match interval {
            Interval::Day1 => {
                let local_date = instant.with_timezone(&exchange_offset).date_naive();
                RawTimestamp::Naive(local_date.and_time(NaiveTime::MIN))
            }
            _ => RawTimestamp::Aware(instant),
        };

        rows.push(RawBar {
            timestamp,
            open: RawValue::Scalar(open * factor),
            high: RawValue::Scalar(high * factor),
            low: RawValue::Scalar(low * factor),
            close: RawValue::Scalar(close * factor),
            volume: RawValue::Scalar(volume),
        });
    }

    Ok(rows)
}

impl From<ProviderInitError> for ProviderError {
    fn from(source: ProviderInitError) -> Self {
        InitSnafu.into_error(source)
    }
}
