//! indexwatch
//!
//! One scheduled run: fetch the daily series, detect the latest
//! EMA/RSI signal and send the summary. Exits non-zero when the run fails
//! so the scheduler can flag it.

use dotenvy::dotenv;
use indexwatch::core::runtime::{RuntimeConfig, SignalRuntime};
use indexwatch::logging;
use indexwatch::notify::{format_error, Notifier};
use indexwatch::services::broker;
use indexwatch::services::market_data::MarketDataProvider;
use indexwatch::services::yahoo::YahooMarketDataProvider;
use indexwatch::Config;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env();
    logging::init_logging(config.is_production());

    info!(
        environment = %config.environment,
        symbol = %config.symbol,
        range = %config.range,
        interval = %config.interval,
        telegram = config.telegram.is_some(),
        broker = config.broker.is_some(),
        "Starting indexwatch run"
    );

    let notifier = Arc::new(Notifier::from_config(&config));

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        match YahooMarketDataProvider::from_config(&config) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                error!(error = %e, "Failed to build market data client");
                notifier.notify(&format_error(&e)).await;
                return ExitCode::FAILURE;
            }
        };

    let broker = Arc::from(broker::from_config(&config));

    let runtime = SignalRuntime::new(RuntimeConfig::from(&config), provider, broker, notifier);

    match runtime.run_once().await {
        Ok(outcome) => {
            info!(delivery = ?outcome.delivery, "Run complete");
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
