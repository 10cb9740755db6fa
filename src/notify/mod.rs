//! Run summary formatting and delivery.

pub mod format;
pub mod telegram;

pub use format::*;
pub use telegram::*;

use crate::config::Config;
use tracing::{info, warn};

/// What happened to a message after it was written to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    ConsoleOnly,
    Sent { status: u16 },
    Failed,
}

/// Writes every message to stdout and forwards it to Telegram when configured.
pub struct Notifier {
    telegram: Option<TelegramClient>,
}

impl Notifier {
    pub fn new(telegram: Option<TelegramClient>) -> Self {
        Self { telegram }
    }

    pub fn console_only() -> Self {
        Self { telegram: None }
    }

    pub fn from_config(config: &Config) -> Self {
        let Some(telegram) = config.telegram.clone() else {
            warn!("Missing TELEGRAM_TOKEN or TELEGRAM_CHAT_ID; messages go to the console only");
            return Self::console_only();
        };

        match TelegramClient::new(config.telegram_base_url.clone(), telegram, config.notify_timeout) {
            Ok(client) => Self::new(Some(client)),
            Err(e) => {
                warn!(error = %e, "Failed to build Telegram client; messages go to the console only");
                Self::console_only()
            }
        }
    }

    /// Best effort: delivery errors are logged and never returned.
    pub async fn notify(&self, text: &str) -> Delivery {
        println!("{}", text);

        let Some(telegram) = &self.telegram else {
            return Delivery::ConsoleOnly;
        };

        match telegram.send_message(text).await {
            Ok(status) => {
                info!(status, "Telegram message sent");
                Delivery::Sent { status }
            }
            Err(e) => {
                warn!(error = %e, "Telegram send failed");
                Delivery::Failed
            }
        }
    }
}
