//! Kite Connect session check: profile lookup plus one LTP quote.

use crate::config::BrokerConfig;
use crate::error::BrokerError;
use crate::models::session::{Quote, SessionStatus};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const KITE_VERSION: &str = "3";

/// Envelope shared by every Kite Connect response.
#[derive(Debug, Deserialize)]
pub struct KiteEnvelope<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KiteProfile {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KiteLtp {
    pub last_price: f64,
}

pub struct KiteSession {
    base_url: String,
    credentials: BrokerConfig,
    client: reqwest::Client,
}

impl KiteSession {
    pub fn new(
        base_url: impl Into<String>,
        credentials: BrokerConfig,
        timeout: Duration,
    ) -> Result<Self, BrokerError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, credentials, client))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        credentials: BrokerConfig,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            client,
        }
    }

    fn url(&self, path: &str) -> Result<Url, BrokerError> {
        Ok(Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            path
        ))?)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, BrokerError> {
        let response = self
            .client
            .get(url)
            .header("X-Kite-Version", KITE_VERSION)
            .header(
                "Authorization",
                format!(
                    "token {}:{}",
                    self.credentials.api_key, self.credentials.access_token
                ),
            )
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let envelope: Option<KiteEnvelope<T>> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let message = envelope
                .and_then(|e| {
                    e.message
                        .map(|m| format!("{}: {}", e.error_type.unwrap_or_default(), m))
                })
                .unwrap_or(body);
            return Err(BrokerError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope =
            envelope.ok_or_else(|| BrokerError::Decode("unexpected response body".to_string()))?;
        if envelope.status != "success" {
            return Err(BrokerError::Status {
                status: status.as_u16(),
                message: envelope.message.unwrap_or(envelope.status),
            });
        }
        envelope
            .data
            .ok_or_else(|| BrokerError::Decode("response has no data".to_string()))
    }

    pub async fn profile(&self) -> Result<KiteProfile, BrokerError> {
        let url = self.url("/user/profile")?;
        self.get(url).await
    }

    pub async fn ltp(&self, instrument: &str) -> Result<Quote, BrokerError> {
        let mut url = self.url("/quote/ltp")?;
        url.query_pairs_mut().append_pair("i", instrument);

        let mut quotes: HashMap<String, KiteLtp> = self.get(url).await?;
        let ltp = quotes.remove(instrument).ok_or_else(|| {
            BrokerError::Decode(format!("no quote returned for {}", instrument))
        })?;

        Ok(Quote {
            instrument: instrument.to_string(),
            last_price: ltp.last_price,
        })
    }
}

#[async_trait::async_trait]
impl super::BrokerSession for KiteSession {
    async fn check(&self) -> SessionStatus {
        let profile = match self.profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Broker session check failed");
                return SessionStatus::Failed {
                    reason: e.to_string(),
                };
            }
        };

        info!(user_id = %profile.user_id, "Broker session active");

        let instrument = &self.credentials.quote_instrument;
        let quote = match self.ltp(instrument).await {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(error = %e, instrument = %instrument, "Broker quote unavailable");
                None
            }
        };

        SessionStatus::Active {
            user: Some(profile.user_name.unwrap_or(profile.user_id)),
            quote,
        }
    }
}
