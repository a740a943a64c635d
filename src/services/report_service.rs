use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use crate::error::AnalyzerError;
use crate::models::PriceSeries;

/// Report file name for an asset, e.g. `bitcoin_relatorio.csv`
pub fn report_file_name(asset_id: &str) -> String {
    format!("{}_relatorio.csv", asset_id)
}

/// Shortest round-trip decimal that always keeps a fractional part ("100.0", "110.5").
///
/// Never switches to exponent notation, however small or large the price.
pub fn format_price(price: f64) -> String {
    let mut text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Write `series` as a semicolon-delimited report into `output_dir`.
///
/// An existing report for the same asset is overwritten.
pub fn write_csv(output_dir: &Path, asset_id: &str, series: &PriceSeries) -> Result<PathBuf, AnalyzerError> {
    let path = output_dir.join(report_file_name(asset_id));
    let report_err = |source: csv::Error| AnalyzerError::Report {
        path: path.display().to_string(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .map_err(report_err)?;

    writer.write_record(["date", "price"]).map_err(report_err)?;
    for point in series.points() {
        writer
            .write_record([point.date.format("%Y-%m-%d").to_string(), format_price(point.price)])
            .map_err(report_err)?;
    }
    writer.flush().map_err(|e| report_err(e.into()))?;

    info!("📁 Report for {} written to {} ({} rows)", asset_id, path.display(), series.len());
    Ok(path)
}
