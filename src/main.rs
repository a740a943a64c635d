use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod error;
mod models;
mod services;
mod ui;
mod utils;

#[cfg(test)]
mod test_support;

use api::coingecko::CoinGeckoClient;
use commands::Session;
use config::AppConfig;

fn main() {
    // .env only feeds RUST_LOG
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("crypto_analyzer=info".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .init();

    info!("🪙 Starting Cryptocurrency Analyzer...");

    // One thread: every action blocks the window until it finishes
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start async runtime: {}", e);
            return;
        }
    };

    let config = AppConfig::default();
    let client = CoinGeckoClient::with_base_url(config.api_base_url.clone());
    info!("Provider: {}, output directory: {}", client.base_url(), config.output_dir.display());

    let session = Session::new(client, config);

    if let Err(e) = ui::run(runtime, session) {
        error!("Window error: {}", e);
    }
    info!("Window closed");
}
