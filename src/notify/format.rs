//! Human-readable run summaries.

use crate::models::indicators::IndicatorRow;
use crate::models::session::SessionStatus;
use crate::models::signal::SignalEvent;

/// Everything a successful run reports.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub label: String,
    pub latest: Option<IndicatorRow>,
    pub signal: Option<SignalEvent>,
    pub session: SessionStatus,
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}

pub fn format_report(report: &RunReport) -> String {
    let mut text = match (&report.signal, &report.latest) {
        (Some(signal), _) => format!(
            "📈 {} {} signal {}\nClose: {:.2}\nEMA(20): {:.2}\nRSI(14): {:.2}",
            report.label, signal.kind, signal.date, signal.close, signal.ema20, signal.rsi14
        ),
        (None, Some(row)) => format!(
            "📈 {} summary {}\nClose: {:.2}\nEMA(20): {}\nRSI(14): {}\nSignal: HOLD",
            report.label,
            row.date,
            row.close,
            fmt_value(row.ema20),
            fmt_value(row.rsi14)
        ),
        (None, None) => format!("📈 {} summary\nNo data\nSignal: HOLD", report.label),
    };

    match &report.session {
        SessionStatus::Skipped => {}
        SessionStatus::Active { user, quote } => {
            text.push_str("\nBroker: session OK");
            if let Some(user) = user {
                text.push_str(&format!(" ({})", user));
            }
            if let Some(q) = quote {
                text.push_str(&format!("\n{} LTP: {:.2}", q.instrument, q.last_price));
            }
        }
        SessionStatus::Failed { .. } => text.push_str("\nBroker: session check failed"),
    }

    text
}

pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("❗Bot error: {}", error)
}
