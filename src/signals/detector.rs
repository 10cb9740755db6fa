//! EMA crossover detector filtered by an RSI band.

use crate::models::indicators::IndicatorRow;
use crate::models::signal::{SignalEvent, SignalKind};

/// RSI thresholds gating the crossover signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRules {
    /// Inclusive lower bound of the BUY band.
    pub buy_rsi_min: f64,
    /// Inclusive upper bound of the BUY band.
    pub buy_rsi_max: f64,
    /// SELL requires RSI strictly above this.
    pub sell_rsi_above: f64,
}

impl Default for SignalRules {
    fn default() -> Self {
        Self {
            buy_rsi_min: 30.0,
            buy_rsi_max: 50.0,
            sell_rsi_above: 70.0,
        }
    }
}

impl SignalRules {
    /// Classify a single day given the previous one.
    ///
    /// Returns `None` when any required value is undefined or the day does
    /// not qualify.
    pub fn classify(&self, prev: &IndicatorRow, current: &IndicatorRow) -> Option<SignalEvent> {
        let rsi = current.rsi14?;
        let ema = current.ema20?;
        let prev_ema = prev.ema20?;

        let crossed_up = prev.close < prev_ema && current.close > ema;
        let crossed_down = prev.close > prev_ema && current.close < ema;

        let kind = if (self.buy_rsi_min..=self.buy_rsi_max).contains(&rsi) && crossed_up {
            SignalKind::Buy
        } else if rsi > self.sell_rsi_above && crossed_down {
            SignalKind::Sell
        } else {
            return None;
        };

        Some(SignalEvent {
            date: current.date,
            kind,
            close: current.close,
            ema20: ema,
            rsi14: rsi,
        })
    }

    /// Scan every row and keep the most recent qualifying event.
    ///
    /// The scan never stops early: a later qualifying day replaces any
    /// earlier candidate.
    pub fn detect(&self, rows: &[IndicatorRow]) -> Option<SignalEvent> {
        rows.windows(2)
            .filter_map(|pair| self.classify(&pair[0], &pair[1]))
            .last()
    }
}

/// Detect with the default 30/50/70 thresholds.
pub fn detect_signal(rows: &[IndicatorRow]) -> Option<SignalEvent> {
    SignalRules::default().detect(rows)
}
