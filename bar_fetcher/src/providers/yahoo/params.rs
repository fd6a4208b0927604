use serde::{Deserialize, Serialize};

use crate::models::request_params::{BarsRequest, ProviderParams};

/// Yahoo-specific parameters for a chart request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct YahooBarsParams {
    /// Scale open/high/low/close by the split- and dividend-adjusted close
    /// when the response carries one. Daily data only; intraday responses
    /// have no adjusted close and pass through unscaled.
    pub auto_adjust: bool,

    /// Include pre- and post-market bars for intraday intervals.
    pub include_prepost: bool,
}

impl Default for YahooBarsParams {
    fn default() -> Self {
        Self {
            auto_adjust: true,
            include_prepost: false,
        }
    }
}

impl YahooBarsParams {
    /// The effective Yahoo parameters for a request, falling back to defaults
    /// when the caller supplied none (or another vendor's parameters).
    pub fn for_request(params: &BarsRequest) -> Self {
        match &params.provider_specific {
            ProviderParams::Yahoo(yahoo) => yahoo.clone(),
            ProviderParams::None => Self::default(),
        }
    }
}

/// Builds the chart-endpoint query string for a bars request.
pub(crate) fn construct_params(
    params: &BarsRequest,
    yahoo: &YahooBarsParams,
) -> Vec<(String, String)> {
    vec![
        ("interval".to_string(), params.interval.as_str().to_string()),
        ("period1".to_string(), params.start.timestamp().to_string()),
        ("period2".to_string(), params.end.timestamp().to_string()),
        (
            "includePrePost".to_string(),
            yahoo.include_prepost.to_string(),
        ),
        ("events".to_string(), "div,splits".to_string()),
    ]
}
