use serde::Serialize;

use crate::{errors::FetchError, models::bar::NormalizedBar};

/// The single payload printed to stdout: exactly one of `data` or `error`.
///
/// Serializes externally tagged, so the JSON shape is
/// `{"data": [...]}` or `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub enum FetchResult {
    #[serde(rename = "data")]
    Data(Vec<NormalizedBar>),
    #[serde(rename = "error")]
    Error(String),
}

impl From<Result<Vec<NormalizedBar>, FetchError>> for FetchResult {
    fn from(outcome: Result<Vec<NormalizedBar>, FetchError>) -> Self {
        match outcome {
            Ok(bars) => FetchResult::Data(bars),
            Err(err) => FetchResult::Error(err.to_string()),
        }
    }
}
