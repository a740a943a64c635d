use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::api::coingecko::{ApiError, CoinGeckoClient, MarketChartQuery};
use crate::error::AnalyzerError;
use crate::models::{PricePoint, PriceSeries};

/// Convert an epoch-millisecond timestamp to its UTC calendar date
pub fn utc_date_from_millis(timestamp_ms: f64) -> Result<NaiveDate, ApiError> {
    if !timestamp_ms.is_finite() {
        return Err(ApiError::InvalidPayload(format!("timestamp {} is not a number", timestamp_ms)));
    }

    DateTime::<Utc>::from_timestamp_millis(timestamp_ms.trunc() as i64)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| ApiError::InvalidPayload(format!("timestamp {} is out of range", timestamp_ms)))
}

/// Collapse `[timestamp_ms, price]` samples into one mean price per UTC date.
///
/// Output is ordered ascending by date and holds exactly the dates present in
/// the input.
pub fn aggregate_daily(samples: &[[f64; 2]]) -> Result<PriceSeries, ApiError> {
    let mut days: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for &[timestamp_ms, price] in samples {
        let date = utc_date_from_millis(timestamp_ms)?;
        let entry = days.entry(date).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    let points = days
        .into_iter()
        .map(|(date, (sum, count))| PricePoint {
            date,
            price: sum / f64::from(count),
        })
        .collect();

    Ok(PriceSeries::from_sorted(points))
}

/// Fetch the last 7 days of USD prices for `asset_id` and aggregate them per day
pub async fn fetch(client: &CoinGeckoClient, asset_id: &str) -> Result<PriceSeries, AnalyzerError> {
    info!("📡 Fetching 7-day history for {}", asset_id);

    let chart = client
        .get_market_chart(asset_id, &MarketChartQuery::WEEKLY_USD)
        .await?;
    debug!("Received {} price samples for {}", chart.prices.len(), asset_id);

    let series = aggregate_daily(&chart.prices)?;
    if series.is_empty() {
        warn!("Provider returned no prices for {}", asset_id);
    }
    info!("Aggregated {} samples into {} days for {}", chart.prices.len(), series.len(), asset_id);

    Ok(series)
}
