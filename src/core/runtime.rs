//! Single-run pipeline: fetch, compute, detect, notify.

use crate::config::Config;
use crate::error::BotError;
use crate::indicators::compute_indicator_rows;
use crate::models::indicators::{IndicatorRow, PricePoint};
use crate::models::signal::SignalEvent;
use crate::notify::{format_error, format_report, Delivery, Notifier, RunReport};
use crate::services::broker::BrokerSession;
use crate::services::market_data::MarketDataProvider;
use crate::signals::SignalRules;
use std::sync::Arc;
use tracing::{error, info};

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbol: String,
    pub label: String,
    pub range: String,
    pub interval: String,
    pub rules: SignalRules,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbol: config.symbol.clone(),
            label: config.label.clone(),
            range: config.range.clone(),
            interval: config.interval.clone(),
            rules: SignalRules::default(),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    pub message: String,
    pub delivery: Delivery,
}

/// Derive the latest indicator row and the most recent signal from a series.
pub fn analyze(
    points: &[PricePoint],
    rules: &SignalRules,
) -> (Option<IndicatorRow>, Option<SignalEvent>) {
    let rows = compute_indicator_rows(points);
    let signal = rules.detect(&rows);
    (rows.last().copied(), signal)
}

pub struct SignalRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    broker: Arc<dyn BrokerSession + Send + Sync>,
    notifier: Arc<Notifier>,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        broker: Arc<dyn BrokerSession + Send + Sync>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            config,
            provider,
            broker,
            notifier,
        }
    }

    /// Run the pipeline once.
    ///
    /// Exactly one message is sent either way. A market data failure is
    /// reported through the notifier and then returned.
    pub async fn run_once(&self) -> Result<RunOutcome, BotError> {
        match self.run_pipeline().await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!(error = %e, symbol = %self.config.symbol, "Run failed");
                self.notifier.notify(&format_error(&e)).await;
                Err(e)
            }
        }
    }

    async fn run_pipeline(&self) -> Result<RunOutcome, BotError> {
        let points = self
            .provider
            .get_closes(&self.config.symbol, &self.config.range, &self.config.interval)
            .await?;

        let (latest, signal) = analyze(&points, &self.config.rules);
        match &signal {
            Some(event) => info!(
                kind = %event.kind,
                date = %event.date,
                close = event.close,
                ema20 = event.ema20,
                rsi14 = event.rsi14,
                "Signal detected"
            ),
            None => info!(rows = points.len(), "No qualifying signal in window"),
        }

        let session = self.broker.check().await;

        let report = RunReport {
            label: self.config.label.clone(),
            latest,
            signal,
            session,
        };
        let message = format_report(&report);
        let delivery = self.notifier.notify(&message).await;

        Ok(RunOutcome {
            report,
            message,
            delivery,
        })
    }
}
