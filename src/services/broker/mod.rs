//! Optional, read-only broker session check.
//!
//! The concrete variant is chosen once from configuration: a Kite Connect
//! session when credentials are present, a no-op otherwise. Nothing here
//! places or modifies orders.

pub mod kite;

pub use kite::*;

use crate::config::Config;
use crate::models::session::SessionStatus;
use tracing::{debug, warn};

#[async_trait::async_trait]
pub trait BrokerSession {
    /// Run the session check. Failures are folded into the returned status.
    async fn check(&self) -> SessionStatus;
}

/// Used when no broker credentials are configured.
pub struct DisabledBroker;

#[async_trait::async_trait]
impl BrokerSession for DisabledBroker {
    async fn check(&self) -> SessionStatus {
        debug!("Broker credentials not configured, skipping session check");
        SessionStatus::Skipped
    }
}

/// Resolve the broker capability from configuration.
///
/// A client that cannot be constructed degrades to [`DisabledBroker`].
pub fn from_config(config: &Config) -> Box<dyn BrokerSession + Send + Sync> {
    let Some(broker) = config.broker.clone() else {
        return Box::new(DisabledBroker);
    };

    match KiteSession::new(config.kite_base_url.clone(), broker, config.http_timeout) {
        Ok(session) => Box::new(session),
        Err(e) => {
            warn!(error = %e, "Failed to build broker client, session check disabled");
            Box::new(DisabledBroker)
        }
    }
}
