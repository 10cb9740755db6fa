//! Unit tests for Yahoo chart normalisation

use chrono::NaiveDate;
use indexwatch::error::FetchError;
use indexwatch::services::yahoo::{ChartResponse, YahooMarketDataProvider};
use serde_json::json;

fn parse(value: serde_json::Value) -> ChartResponse {
    serde_json::from_value(value).expect("valid chart json")
}

// 2024-03-14 and 2024-03-15 09:15 IST
const TS_14: i64 = 1_710_387_900;
const TS_15: i64 = 1_710_474_300;
const DAY: i64 = 86_400;

#[test]
fn test_prefers_adjusted_close_and_sorts() {
    let chart = parse(json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "^NSEI", "gmtoffset": 19800 },
                "timestamp": [TS_15, TS_14],
                "indicators": {
                    "quote": [{ "close": [2.0, 1.0] }],
                    "adjclose": [{ "adjclose": [20.0, 10.0] }]
                }
            }],
            "error": null
        }
    }));

    let points = chart.into_price_points().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    assert_eq!(points[0].close, 10.0);
    assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(points[1].close, 20.0);
}

#[test]
fn test_drops_null_closes_and_duplicate_dates() {
    let chart = parse(json!({
        "chart": {
            "result": [{
                "meta": { "gmtoffset": 19800 },
                "timestamp": [TS_14, TS_15, TS_15 + 3600],
                "indicators": { "quote": [{ "close": [null, 5.0, 6.0] }] }
            }]
        }
    }));

    let points = chart.into_price_points().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].close, 6.0);
}

#[test]
fn test_missing_close_field() {
    let chart = parse(json!({
        "chart": {
            "result": [{
                "timestamp": [TS_14],
                "indicators": { "quote": [{}] }
            }]
        }
    }));
    assert!(matches!(
        chart.into_price_points(),
        Err(FetchError::MissingField("close"))
    ));
}

#[test]
fn test_no_rows_is_no_data() {
    let empty = parse(json!({
        "chart": { "result": [{ "indicators": { "quote": [{}] } }] }
    }));
    assert!(matches!(empty.into_price_points(), Err(FetchError::NoData)));

    let all_null = parse(json!({
        "chart": {
            "result": [{
                "timestamp": [TS_14],
                "indicators": { "quote": [{ "close": [null] }] }
            }]
        }
    }));
    assert!(matches!(all_null.into_price_points(), Err(FetchError::NoData)));
}

#[test]
fn test_chart_error() {
    let chart = parse(json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
        }
    }));
    match chart.into_price_points() {
        Err(FetchError::Provider(message)) => assert!(message.contains("Not Found")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_chart_url_encodes_symbol() {
    let provider = YahooMarketDataProvider::with_client("http://localhost:9/", reqwest::Client::new());
    let url = provider.chart_url("^NSEI", "6mo", "1d").unwrap();
    assert_eq!(url.path(), "/v8/finance/chart/^NSEI");
    assert_eq!(url.query(), Some("range=6mo&interval=1d&events=history"));
}

#[test]
fn test_chart_url_encodes_space_and_slash_in_symbol() {
    let provider = YahooMarketDataProvider::with_client("http://localhost:9", reqwest::Client::new());
    let url = provider.chart_url("NIFTY 50", "6mo", "1d").unwrap();
    assert_eq!(url.path(), "/v8/finance/chart/NIFTY%2050");

    let url = provider.chart_url("A/B", "6mo", "1d").unwrap();
    assert_eq!(url.path(), "/v8/finance/chart/A%2FB");
}

#[test]
fn test_chart_url_keeps_base_path_prefix() {
    let provider = YahooMarketDataProvider::with_client("http://localhost:9/proxy/", reqwest::Client::new());
    let url = provider.chart_url("^NSEI", "6mo", "1d").unwrap();
    assert_eq!(url.path(), "/proxy/v8/finance/chart/^NSEI");
}

#[test]
fn test_timestamp_close_length_mismatch_is_decode_error() {
    let more_timestamps = parse(json!({
        "chart": {
            "result": [{
                "timestamp": [TS_14, TS_15, TS_15 + DAY],
                "indicators": { "quote": [{ "close": [1.0, 2.0] }] }
            }]
        }
    }));
    match more_timestamps.into_price_points() {
        Err(FetchError::Decode(message)) => assert_eq!(message, "3 timestamps but 2 closes"),
        other => panic!("unexpected result: {:?}", other),
    }

    let more_closes = parse(json!({
        "chart": {
            "result": [{
                "timestamp": [TS_14],
                "indicators": { "adjclose": [{ "adjclose": [1.0, 2.0] }] }
            }]
        }
    }));
    match more_closes.into_price_points() {
        Err(FetchError::Decode(message)) => assert_eq!(message, "1 timestamps but 2 closes"),
        other => panic!("unexpected result: {:?}", other),
    }
}
