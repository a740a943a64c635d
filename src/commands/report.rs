use super::{Dialog, Session};
use crate::error::AnalyzerError;
use crate::models::Asset;
use crate::services::{fetch_service, report_service};

/// "Generate CSV report": fetch the selected asset and write its report
pub async fn execute(session: &mut Session, asset: Asset) -> Result<(), AnalyzerError> {
    let series = fetch_service::fetch(&session.client, asset.id).await?;
    report_service::write_csv(&session.config.output_dir, asset.id, &series)?;

    session.dialog = Some(Dialog::info(
        "Success",
        format!("Report saved as '{}'!", report_service::report_file_name(asset.id)),
    ));
    Ok(())
}
