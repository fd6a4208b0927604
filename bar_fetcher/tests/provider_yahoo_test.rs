#![cfg(test)]
use chrono::{NaiveDate, TimeZone, Utc};
use serial_test::serial;

use bar_fetcher::{
    fetch_day_bars,
    models::{
        bar::{RawBar, RawTimestamp},
        interval::Interval,
        request_params::{BarsRequest, FetchRequest, ProviderParams},
    },
    providers::{DataProvider, yahoo::YahooProvider},
};

// These tests hit the live chart endpoint and are ignored by default. Run
// them with `cargo test -- --ignored` from a network-connected machine, or
// point YF_CHART_BASE_URL at a stub.

#[tokio::test]
#[serial]
#[ignore]
async fn fetches_daily_bars_as_naive_exchange_dates() {
    let provider = YahooProvider::new().expect("failed to create YahooProvider");

    let params = BarsRequest {
        symbol: "AAPL".to_string(),
        interval: Interval::Day1,
        start: Utc.with_ymd_and_hms(2024, 2, 1, 5, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 2, 2, 5, 0, 0).unwrap(),
        provider_specific: ProviderParams::None,
    };

    let rows: Vec<RawBar> = provider
        .fetch_bars(&params)
        .await
        .expect("fetch_bars returned an error");

    assert_eq!(rows.len(), 1, "expected exactly one daily bar");
    match rows[0].timestamp {
        RawTimestamp::Naive(naive) => {
            assert_eq!(naive.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        }
        RawTimestamp::Aware(_) => panic!("daily bars should be naive"),
    }
}

#[tokio::test]
#[serial]
#[ignore]
async fn a_full_intraday_day_normalizes_onto_the_requested_date() {
    let provider = YahooProvider::new().expect("failed to create YahooProvider");
    let request = FetchRequest::new("AAPL", Interval::Min30, "2024-02-01").unwrap();

    let bars = fetch_day_bars(&provider, &request)
        .await
        .expect("fetch_day_bars returned an error");

    assert!(!bars.is_empty());
    for bar in &bars {
        assert!(
            bar.timestamp.starts_with("2024-02-01 "),
            "bar escaped the requested Eastern day: {}",
            bar.timestamp
        );
    }
}

#[tokio::test]
#[serial]
#[ignore]
async fn an_unknown_symbol_surfaces_the_api_error() {
    let provider = YahooProvider::new().expect("failed to create YahooProvider");
    let request =
        FetchRequest::new("THIS-SYMBOL-DOES-NOT-EXIST", Interval::Day1, "2024-02-01").unwrap();

    let result = fetch_day_bars(&provider, &request).await;
    assert!(result.is_err());
}
