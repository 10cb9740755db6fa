//! Aligns the indicator series with the price points they were derived from.

use crate::indicators::momentum::{rsi_series, RSI_PERIOD};
use crate::indicators::trend::{ema_series, EMA_SPAN};
use crate::models::indicators::{close_prices, IndicatorRow, PricePoint};

/// Compute EMA(20) and RSI(14) for every price point.
///
/// Pure: the same input always yields the same rows.
pub fn compute_indicator_rows(points: &[PricePoint]) -> Vec<IndicatorRow> {
    let closes = close_prices(points);
    let emas = ema_series(&closes, EMA_SPAN);
    let rsis = rsi_series(&closes, RSI_PERIOD);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| IndicatorRow {
            date: point.date,
            close: point.close,
            ema20: emas.get(i).copied(),
            rsi14: rsis.get(i).copied().flatten(),
        })
        .collect()
}
