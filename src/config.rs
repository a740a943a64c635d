//! Fixed runtime configuration

use std::path::PathBuf;

use crate::api::coingecko::CoinGeckoClient;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Reports land here; the current working directory
    pub output_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: CoinGeckoClient::DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            chart_width: 800,
            chart_height: 400,
        }
    }
}
