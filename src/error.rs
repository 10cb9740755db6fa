use thiserror::Error;

/// Market data retrieval failures. Always fatal for a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("market data request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("market data request returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode market data response: {0}")]
    Decode(String),

    #[error("market data provider error: {0}")]
    Provider(String),

    #[error("market data response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("No data.")]
    NoData,

    #[error("invalid market data url: {0}")]
    Url(#[from] url::ParseError),
}

/// Telegram delivery failures. Logged, never propagated past the notifier.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telegram returned status {0}")]
    Status(u16),
}

/// Broker session check failures. Folded into the session status.
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("broker request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("broker returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode broker response: {0}")]
    Decode(String),

    #[error("invalid broker url: {0}")]
    Url(#[from] url::ParseError),
}

/// Failures that abort a run.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
