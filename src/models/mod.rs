//! Data models shared by the fetch, report and chart services

pub mod asset;
pub mod chart;
pub mod price_series;

pub use asset::{Asset, SUPPORTED_ASSETS};
pub use chart::{ChartImage, ChartView};
pub use price_series::{PricePoint, PriceSeries};
