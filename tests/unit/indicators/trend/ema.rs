//! Unit tests for EMA indicator

use indexwatch::indicators::trend::{ema_series, smoothing_factor, EMA_SPAN};

#[test]
fn test_ema_constant_series() {
    let closes = vec![250.0; 40];
    let ema = ema_series(&closes, EMA_SPAN);
    assert_eq!(ema.len(), closes.len());
    assert!(ema.iter().all(|&v| v == 250.0));
}

#[test]
fn test_ema_seeded_with_first_close() {
    let ema = ema_series(&[100.0, 121.0], EMA_SPAN);
    assert_eq!(ema[0], 100.0);
    // α = 2/21, so one step moves 2/21 of the way towards 121
    assert!((ema[1] - 102.0).abs() < 1e-12);
}

#[test]
fn test_ema_recursion() {
    let closes = [100.0, 101.0, 99.0, 98.0, 97.0];
    let alpha = smoothing_factor(EMA_SPAN);
    let ema = ema_series(&closes, EMA_SPAN);
    for i in 1..closes.len() {
        let expected = alpha * closes[i] + (1.0 - alpha) * ema[i - 1];
        assert!((ema[i] - expected).abs() < 1e-9);
    }
}

#[test]
fn test_ema_empty_and_zero_span() {
    assert!(ema_series(&[], EMA_SPAN).is_empty());
    assert!(ema_series(&[1.0, 2.0], 0).is_empty());
}

#[test]
fn test_ema_idempotent() {
    let closes = crate::fixtures::two_buys();
    let first = ema_series(&closes, EMA_SPAN);
    let second = ema_series(&closes, EMA_SPAN);
    assert_eq!(first, second);
}
