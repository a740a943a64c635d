use tracing::debug;

use super::Session;
use crate::error::AnalyzerError;
use crate::models::{Asset, ChartView};
use crate::services::{chart_service, fetch_service};

/// "View chart": fetch the selected asset and hand its chart to the viewer.
///
/// The open viewer is the confirmation; no info dialog follows.
pub async fn execute(session: &mut Session, asset: Asset) -> Result<(), AnalyzerError> {
    let series = fetch_service::fetch(&session.client, asset.id).await?;
    let size = (session.config.chart_width, session.config.chart_height);
    let image = chart_service::render(asset.id, &series, size)?;

    if let Some(previous) = session.chart.as_ref() {
        debug!("Replacing open chart for {}", previous.asset_id);
    }
    session.chart = Some(ChartView {
        asset_id: asset.id.to_string(),
        title: chart_service::chart_title(asset.id),
        image,
    });
    Ok(())
}
