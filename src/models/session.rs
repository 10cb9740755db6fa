use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub instrument: String,
    pub last_price: f64,
}

/// Outcome of the optional broker session check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionStatus {
    /// No credentials configured; nothing was called.
    Skipped,
    Active {
        user: Option<String>,
        quote: Option<Quote>,
    },
    Failed {
        reason: String,
    },
}
