//! Market data provider interface.

use crate::error::FetchError;
use crate::models::indicators::PricePoint;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Get the daily close series for a symbol over a lookback `range`.
    ///
    /// Points are strictly increasing by date with no duplicates. An empty
    /// series is reported as [`FetchError::NoData`], never as `Ok`.
    async fn get_closes(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>, FetchError>;
}
