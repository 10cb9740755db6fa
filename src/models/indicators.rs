use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily close, as normalised by the market data boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A price point with its derived indicator values.
///
/// `rsi14` stays `None` until enough history exists to seed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi14: Option<f64>,
}

/// Extract close prices from a slice of price points.
pub fn close_prices(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}
