use thiserror::Error;

use crate::api::coingecko::ApiError;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] ApiError),

    #[error("failed to write report '{path}': {source}")]
    Report {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render chart: {0}")]
    Render(String),
}
