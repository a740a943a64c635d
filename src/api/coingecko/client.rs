use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use super::models::{ApiError, MarketChartQuery, MarketChartResponse};
use tracing::{debug, warn};

/// CoinGecko public API client for market-chart price history
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a new client; `DEFAULT_BASE_URL` targets the public API
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a non-success status to an error, keeping the body text as cause
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET /coins/{id}/market_chart
    ///
    /// # Arguments
    /// * `asset_id` - Provider identifier, e.g. "bitcoin"
    /// * `query` - Reference currency, window and sampling interval
    ///
    /// # Returns
    /// * `Ok(MarketChartResponse)` - Raw `[timestamp_ms, price]` samples
    /// * `Err(ApiError)` - Network failure, non-2xx status or unexpected body
    pub async fn get_market_chart(
        &self,
        asset_id: &str,
        query: &MarketChartQuery,
    ) -> Result<MarketChartResponse, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, asset_id);
        debug!("GET {} {:?}", url, query.as_params());

        let response = self.http_client
            .get(&url)
            .headers(Self::create_headers())
            .query(&query.as_params())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MarketChartResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubServer;

    #[tokio::test]
    async fn test_get_market_chart_sends_fixed_query() {
        let server = StubServer::start(200, r#"{"prices": [[1704067200000, 100.0]]}"#).await;
        let client = CoinGeckoClient::with_base_url(server.base_url());

        let chart = client
            .get_market_chart("bitcoin", &MarketChartQuery::WEEKLY_USD)
            .await
            .unwrap();

        assert_eq!(chart.prices, vec![[1704067200000.0, 100.0]]);
        assert_eq!(server.hits(), 1);
        let line = &server.request_lines()[0];
        assert!(line.starts_with("GET /coins/bitcoin/market_chart?"));
        assert!(line.contains("vs_currency=usd&days=7&interval=daily"));
    }

    #[tokio::test]
    async fn test_get_market_chart_maps_not_found() {
        let server = StubServer::start(404, r#"{"error": "coin not found"}"#).await;
        let client = CoinGeckoClient::with_base_url(server.base_url());

        let err = client
            .get_market_chart("notacoin", &MarketChartQuery::WEEKLY_USD)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(ref body) if body.contains("coin not found")));
    }

    #[tokio::test]
    async fn test_get_market_chart_maps_server_error() {
        let server = StubServer::start(503, "unavailable").await;
        let client = CoinGeckoClient::with_base_url(server.base_url());

        let err = client
            .get_market_chart("bitcoin", &MarketChartQuery::WEEKLY_USD)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ServerError(503, _)));
    }

    #[tokio::test]
    async fn test_get_market_chart_rejects_missing_prices() {
        let server = StubServer::start(200, r#"{"total_volumes": []}"#).await;
        let client = CoinGeckoClient::with_base_url(server.base_url());

        let err = client
            .get_market_chart("bitcoin", &MarketChartQuery::WEEKLY_USD)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CoinGeckoClient::with_base_url("http://localhost:1234/api/".to_string());
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }
}
