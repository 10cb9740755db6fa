//! Daily index trend watcher.
//!
//! Fetches a daily close series, derives EMA(20) and RSI(14), looks for the
//! most recent RSI-filtered crossover and reports it through Telegram.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod notify;
pub mod services;
pub mod signals;

pub use config::Config;
pub use error::{BotError, BrokerError, FetchError, NotifyError};
