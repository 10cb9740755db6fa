//! Wire types for the `/v8/finance/chart` endpoint and their normalisation.

use crate::error::FetchError;
use crate::models::indicators::PricePoint;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    pub gmtoffset: Option<i32>,
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
    #[serde(default)]
    pub adjclose: Option<Vec<AdjCloseSeries>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjCloseSeries {
    #[serde(default)]
    pub adjclose: Option<Vec<Option<f64>>>,
}

impl ChartResponse {
    /// Normalise the response into an ordered close series.
    ///
    /// Adjusted closes are preferred over raw closes. Null or non-finite
    /// closes are dropped, rows are sorted by exchange-local date and a
    /// repeated date keeps its last value.
    pub fn into_price_points(self) -> Result<Vec<PricePoint>, FetchError> {
        if let Some(err) = self.chart.error {
            return Err(FetchError::Provider(format!("{}: {}", err.code, err.description)));
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or(FetchError::MissingField("chart.result"))?;

        let timestamps = match result.timestamp {
            Some(ts) if !ts.is_empty() => ts,
            _ => return Err(FetchError::NoData),
        };

        let closes = result
            .indicators
            .adjclose
            .and_then(|series| series.into_iter().next())
            .and_then(|series| series.adjclose)
            .or_else(|| {
                result
                    .indicators
                    .quote
                    .into_iter()
                    .next()
                    .and_then(|series| series.close)
            })
            .ok_or(FetchError::MissingField("close"))?;

        if timestamps.len() != closes.len() {
            return Err(FetchError::Decode(format!(
                "{} timestamps but {} closes",
                timestamps.len(),
                closes.len()
            )));
        }

        let offset = FixedOffset::east_opt(result.meta.gmtoffset.unwrap_or(0))
            .ok_or_else(|| FetchError::Decode("gmtoffset out of range".to_string()))?;

        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (ts, close) in timestamps.into_iter().zip(closes) {
            let Some(close) = close.filter(|c| c.is_finite()) else {
                continue;
            };
            let date = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| FetchError::Decode(format!("invalid timestamp {}", ts)))?
                .with_timezone(&offset)
                .date_naive();
            by_date.insert(date, close);
        }

        if by_date.is_empty() {
            return Err(FetchError::NoData);
        }

        Ok(by_date
            .into_iter()
            .map(|(date, close)| PricePoint::new(date, close))
            .collect())
    }
}
