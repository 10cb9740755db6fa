//! EMA (Exponential Moving Average) indicator

/// Span used by the daily crossover signal.
pub const EMA_SPAN: usize = 20;

/// Smoothing factor for a given span: 2 / (span + 1)
pub fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Calculate the recursive EMA series for `closes`.
///
/// Seeded with the first close and defined for every index, so the output
/// has the same length as the input. A zero span yields an empty series.
pub fn ema_series(closes: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }

    let alpha = smoothing_factor(span);
    let mut out = Vec::with_capacity(closes.len());
    let mut prev: Option<f64> = None;

    for &close in closes {
        // prev + α·(close - prev) == α·close + (1-α)·prev, and stays exact on flat input
        let value = match prev {
            Some(p) => p + alpha * (close - p),
            None => close,
        };
        out.push(value);
        prev = Some(value);
    }

    out
}

