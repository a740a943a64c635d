use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response from GET /coins/{id}/market_chart
///
/// The provider also sends `market_caps` and `total_volumes`; only the price
/// list is read. Each sample is `[timestamp_ms, price]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<[f64; 2]>,
}

/// Fixed query contract of the market-chart endpoint
#[derive(Debug, Clone, Copy)]
pub struct MarketChartQuery {
    pub vs_currency: &'static str,
    pub days: &'static str,
    pub interval: &'static str,
}

impl MarketChartQuery {
    /// USD prices, last 7 days, one sample per day
    pub const WEEKLY_USD: MarketChartQuery = MarketChartQuery {
        vs_currency: "usd",
        days: "7",
        interval: "daily",
    };

    pub fn as_params(&self) -> [(&'static str, &'static str); 3] {
        [
            ("vs_currency", self.vs_currency),
            ("days", self.days),
            ("interval", self.interval),
        ]
    }
}

/// Error type for provider operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 404 Not Found (unknown asset identifier)
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other non-2xx statuses
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body is not the expected JSON shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    /// Body parsed but carries values that cannot be used
    #[error("Invalid Payload: {0}")]
    InvalidPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_market_chart_ignores_extra_fields() {
        let body = r#"{
            "prices": [[1704067200000, 42000.5], [1704153600000, 43000.0]],
            "market_caps": [[1704067200000, 1.0]],
            "total_volumes": [[1704067200000, 2.0]]
        }"#;
        let parsed: MarketChartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.prices.len(), 2);
        assert_eq!(parsed.prices[0], [1704067200000.0, 42000.5]);
    }

    #[test]
    fn test_missing_prices_field_is_rejected() {
        let body = r#"{"market_caps": []}"#;
        assert!(serde_json::from_str::<MarketChartResponse>(body).is_err());
    }

    #[test]
    fn test_weekly_usd_params() {
        let params = MarketChartQuery::WEEKLY_USD.as_params();
        assert_eq!(
            params,
            [("vs_currency", "usd"), ("days", "7"), ("interval", "daily")]
        );
    }
}
