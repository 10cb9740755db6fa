//! Telegram Bot API client (sendMessage only).

use crate::config::TelegramConfig;
use crate::error::NotifyError;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

pub struct TelegramClient {
    base_url: String,
    config: TelegramConfig,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(
        base_url: impl Into<String>,
        config: TelegramConfig,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, config, client))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        config: TelegramConfig,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            config,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.config.token
        )
    }

    /// Post one message. Any non-2xx status is an error; nothing is retried.
    pub async fn send_message(&self, text: &str) -> Result<u16, NotifyError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&SendMessage {
                chat_id: &self.config.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }
        Ok(status.as_u16())
    }
}
