//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss

pub const RSI_PERIOD: usize = 14;

/// Calculate the Wilder-smoothed RSI series for `closes`.
///
/// The output has the same length as the input. Index `i` is `None` while
/// fewer than `period` differences exist, i.e. for every `i < period`. The
/// first value is seeded from the simple mean of the first `period` gains
/// and losses; later values use running averages
/// `avg = (avg_prev * (period - 1) + current) / period`.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        })
        .unzip();

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;
    out[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // gains[i - 1] is the change from closes[i - 1] to closes[i]
    for i in (period + 1)..closes.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[i - 1]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[i - 1]) / n;
        out[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    out
}

/// Zero average loss saturates at 100 instead of dividing by zero.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

