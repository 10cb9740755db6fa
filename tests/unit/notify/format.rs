//! Unit tests for message formatting

use chrono::NaiveDate;
use indexwatch::error::FetchError;
use indexwatch::models::indicators::IndicatorRow;
use indexwatch::models::session::{Quote, SessionStatus};
use indexwatch::models::signal::{SignalEvent, SignalKind};
use indexwatch::notify::{format_error, format_report, RunReport};

fn latest() -> IndicatorRow {
    IndicatorRow {
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        close: 22023.349,
        ema20: Some(22101.5),
        rsi14: Some(48.4567),
    }
}

fn report(signal: Option<SignalEvent>, session: SessionStatus) -> RunReport {
    RunReport {
        label: "NIFTY".to_string(),
        latest: Some(latest()),
        signal,
        session,
    }
}

#[test]
fn test_signal_message() {
    let signal = SignalEvent {
        date: NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
        kind: SignalKind::Buy,
        close: 96.0,
        ema20: 95.2958925,
        rsi14: 47.2303729,
    };
    let text = format_report(&report(Some(signal), SessionStatus::Skipped));

    assert_eq!(
        text,
        "📈 NIFTY BUY signal 2024-01-21\nClose: 96.00\nEMA(20): 95.30\nRSI(14): 47.23"
    );
}

#[test]
fn test_hold_message_uses_latest_row() {
    let text = format_report(&report(None, SessionStatus::Skipped));
    assert_eq!(
        text,
        "📈 NIFTY summary 2024-03-15\nClose: 22023.35\nEMA(20): 22101.50\nRSI(14): 48.46\nSignal: HOLD"
    );
}

#[test]
fn test_hold_message_with_undefined_rsi() {
    let mut report = report(None, SessionStatus::Skipped);
    report.latest = Some(IndicatorRow {
        rsi14: None,
        ..latest()
    });
    assert!(format_report(&report).contains("RSI(14): n/a"));
}

#[test]
fn test_session_lines() {
    let active = SessionStatus::Active {
        user: Some("Jo".to_string()),
        quote: Some(Quote {
            instrument: "NSE:NIFTY 50".to_string(),
            last_price: 22050.1,
        }),
    };
    let text = format_report(&report(None, active));
    assert!(text.ends_with("\nBroker: session OK (Jo)\nNSE:NIFTY 50 LTP: 22050.10"));

    let failed = SessionStatus::Failed {
        reason: "403".to_string(),
    };
    let text = format_report(&report(None, failed));
    assert!(text.ends_with("\nBroker: session check failed"));

    let text = format_report(&report(None, SessionStatus::Skipped));
    assert!(!text.contains("Broker"));
}

#[test]
fn test_error_message() {
    assert_eq!(format_error(&FetchError::NoData), "❗Bot error: No data.");
}
