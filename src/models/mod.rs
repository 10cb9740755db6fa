//! Shared data models spanning the pipeline stages.

pub mod indicators;
pub mod session;
pub mod signal;

pub use indicators::{close_prices, IndicatorRow, PricePoint};
pub use session::{Quote, SessionStatus};
pub use signal::{SignalEvent, SignalKind};
