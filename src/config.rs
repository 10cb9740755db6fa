//! Run configuration, read once from the environment at process entry.

use std::env;
use std::time::Duration;

pub const DEFAULT_SYMBOL: &str = "^NSEI";
pub const DEFAULT_LABEL: &str = "NIFTY";
pub const DEFAULT_RANGE: &str = "6mo";
pub const DEFAULT_INTERVAL: &str = "1d";
pub const DEFAULT_QUOTE_INSTRUMENT: &str = "NSE:NIFTY 50";

pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";
pub const KITE_BASE_URL: &str = "https://api.kite.trade";

/// Telegram delivery timeout.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(20);
/// Timeout applied to market data and broker calls.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram credentials. Present only when both values are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

/// Kite Connect credentials. Present only when key and access token are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerConfig {
    pub api_key: String,
    /// Read for completeness, never used: the session check needs no signing.
    pub api_secret: Option<String>,
    pub access_token: String,
    pub quote_instrument: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub symbol: String,
    pub label: String,
    pub range: String,
    pub interval: String,
    pub yahoo_base_url: String,
    pub telegram_base_url: String,
    pub kite_base_url: String,
    pub telegram: Option<TelegramConfig>,
    pub broker: Option<BrokerConfig>,
    pub notify_timeout: Duration,
    pub http_timeout: Duration,
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty or whitespace-only values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let telegram = match (get("TELEGRAM_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramConfig { token, chat_id }),
            _ => None,
        };

        let broker = match (get("KITE_API_KEY"), get("KITE_ACCESS_TOKEN")) {
            (Some(api_key), Some(access_token)) => Some(BrokerConfig {
                api_key,
                api_secret: get("KITE_API_SECRET"),
                access_token,
                quote_instrument: get("KITE_QUOTE_INSTRUMENT")
                    .unwrap_or_else(|| DEFAULT_QUOTE_INSTRUMENT.to_string()),
            }),
            _ => None,
        };

        Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "sandbox".to_string()),
            symbol: get("INDEXWATCH_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            label: get("INDEXWATCH_LABEL").unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            range: get("INDEXWATCH_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            interval: get("INDEXWATCH_INTERVAL").unwrap_or_else(|| DEFAULT_INTERVAL.to_string()),
            yahoo_base_url: get("YAHOO_BASE_URL").unwrap_or_else(|| YAHOO_BASE_URL.to_string()),
            telegram_base_url: get("TELEGRAM_BASE_URL")
                .unwrap_or_else(|| TELEGRAM_BASE_URL.to_string()),
            kite_base_url: get("KITE_BASE_URL").unwrap_or_else(|| KITE_BASE_URL.to_string()),
            telegram,
            broker,
            notify_timeout: NOTIFY_TIMEOUT,
            http_timeout: HTTP_TIMEOUT,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
