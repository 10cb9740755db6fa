//! Yahoo Finance market data provider implementation

use crate::config::Config;
use crate::error::FetchError;
use crate::models::indicators::PricePoint;
use crate::services::market_data::MarketDataProvider;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::{ParseError, Url};

use super::messages::ChartResponse;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; indexwatch/0.1)";

pub struct YahooMarketDataProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooMarketDataProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.yahoo_base_url.clone(), config.http_timeout)
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Chart endpoint for `symbol`, with the symbol percent-encoded as a path segment.
    pub fn chart_url(&self, symbol: &str, range: &str, interval: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("range", range)
            .append_pair("interval", interval)
            .append_pair("events", "history");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_closes(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>, FetchError> {
        let url = self.chart_url(symbol, range, interval)?;
        debug!(url = %url, "Requesting chart data");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Yahoo reports unknown symbols as a chart error with a 404
            if let Ok(chart) = serde_json::from_str::<ChartResponse>(&body) {
                if chart.chart.error.is_some() {
                    return chart.into_price_points();
                }
            }
            warn!(status = status.as_u16(), symbol, "Chart request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chart: ChartResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let meta = chart
            .chart
            .result
            .as_ref()
            .and_then(|results| results.first())
            .map(|result| result.meta.clone())
            .unwrap_or_default();
        let points = chart.into_price_points()?;

        info!(
            symbol,
            exchange_symbol = ?meta.symbol,
            timezone = ?meta.exchange_timezone_name,
            rows = points.len(),
            first = ?points.first().map(|p| p.date),
            last = ?points.last().map(|p| p.date),
            "Fetched daily closes"
        );
        Ok(points)
    }
}
