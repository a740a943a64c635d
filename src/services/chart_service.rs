use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use chrono::NaiveDate;
use plotters::prelude::*;
use plotters::style::register_font;
use tracing::{info, warn};

use crate::error::AnalyzerError;
use crate::models::{ChartImage, PriceSeries};
use crate::utils::capitalize;

/// Bundled UI font reused for chart text, so rendering never depends on system fonts
const CHART_FONT: &str = "Ubuntu-Light";

pub fn chart_title(asset_id: &str) -> String {
    format!("Price of {} (last 7 days)", capitalize(asset_id))
}

fn ensure_font() -> Result<(), AnalyzerError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let registered = *REGISTERED.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        let Some(data) = definitions.font_data.get(CHART_FONT) else {
            warn!("Font {} is not bundled", CHART_FONT);
            return false;
        };
        let bytes: &'static [u8] = match &data.font {
            Cow::Borrowed(bytes) => *bytes,
            Cow::Owned(bytes) => Box::leak(bytes.clone().into_boxed_slice()),
        };
        register_font("sans-serif", FontStyle::Normal, bytes).is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(AnalyzerError::Render(format!("Font {} could not be loaded", CHART_FONT)))
    }
}

/// Date axis padded by one day on each side so edge markers stay visible
pub fn date_range(series: &PriceSeries) -> Option<Range<NaiveDate>> {
    let first = series.first_date()?;
    let last = series.last_date()?;
    Some(first.pred_opt().unwrap_or(first)..last.succ_opt().unwrap_or(last))
}

/// Price axis padded by 10%; a flat series still gets a non-empty range
pub fn price_range(series: &PriceSeries) -> Option<Range<f64>> {
    let (min_price, max_price) = series.price_bounds()?;

    let span = (max_price - min_price)
        .max(max_price.abs() * 0.01)
        .max(1e-8);
    let padding = span * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    Some(y_min..y_max)
}

/// Render `series` as a line chart with a marker per day.
///
/// Pixels stay in memory for the viewer window; nothing touches the disk.
pub fn render(
    asset_id: &str,
    series: &PriceSeries,
    (width, height): (u32, u32),
) -> Result<ChartImage, AnalyzerError> {
    let (Some(x_range), Some(y_range)) = (date_range(series), price_range(series)) else {
        return Err(AnalyzerError::Render(format!("No price data to chart for {}", asset_id)));
    };
    if width == 0 || height == 0 {
        return Err(AnalyzerError::Render(format!("Invalid chart size {}x{}", width, height)));
    }
    ensure_font()?;

    let mut rgb = vec![0u8; width as usize * height as usize * 3];

    {
        let backend = BitMapBackend::with_buffer(&mut rgb, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| AnalyzerError::Render(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(chart_title(asset_id), ("sans-serif", 28.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| AnalyzerError::Render(format!("Failed to build chart: {}", e)))?;

        // Mesh lines double as the grid
        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Price (USD)")
            .x_labels(series.len() + 2)
            .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
            .y_label_formatter(&|p: &f64| format!("{:.2}", p))
            .draw()
            .map_err(|e| AnalyzerError::Render(format!("Failed to draw mesh: {}", e)))?;

        chart
            .draw_series(LineSeries::new(
                series.points().iter().map(|p| (p.date, p.price)),
                &BLUE,
            ))
            .map_err(|e| AnalyzerError::Render(format!("Failed to draw line: {}", e)))?;

        chart
            .draw_series(
                series
                    .points()
                    .iter()
                    .map(|p| Circle::new((p.date, p.price), 4, BLUE.filled())),
            )
            .map_err(|e| AnalyzerError::Render(format!("Failed to draw point: {}", e)))?;

        root.present()
            .map_err(|e| AnalyzerError::Render(format!("Failed to render chart: {}", e)))?;
    }

    info!("📈 Chart for {} rendered ({}x{}, {} points)", asset_id, width, height, series.len());
    Ok(ChartImage { width, height, rgb })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricePoint;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(points: &[(NaiveDate, f64)]) -> PriceSeries {
        PriceSeries::from_sorted(
            points
                .iter()
                .map(|&(date, price)| PricePoint { date, price })
                .collect(),
        )
    }

    #[test]
    fn test_chart_title_capitalizes_asset() {
        assert_eq!(chart_title("bitcoin"), "Price of Bitcoin (last 7 days)");
        assert_eq!(chart_title("dogecoin"), "Price of Dogecoin (last 7 days)");
    }

    #[test]
    fn test_date_range_is_padded_by_a_day() {
        let s = series(&[(date(2024, 1, 1), 1.0), (date(2024, 1, 7), 2.0)]);
        assert_eq!(date_range(&s), Some(date(2023, 12, 31)..date(2024, 1, 8)));
    }

    #[test]
    fn test_single_point_ranges_are_not_empty() {
        let s = series(&[(date(2024, 1, 1), 100.0)]);

        let x = date_range(&s).unwrap();
        assert!(x.start < x.end);

        let y = price_range(&s).unwrap();
        assert!(y.start < 100.0 && y.end > 100.0);
    }

    #[test]
    fn test_price_range_pads_and_clamps_at_zero() {
        let s = series(&[(date(2024, 1, 1), 0.05), (date(2024, 1, 2), 1.05)]);
        let y = price_range(&s).unwrap();
        assert_eq!(y.start, 0.0);
        assert!((y.end - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_render_empty_series_fails() {
        let err = render("bitcoin", &PriceSeries::default(), (800, 400)).unwrap_err();
        assert!(matches!(err, AnalyzerError::Render(_)));
    }

    #[test]
    fn test_render_week_of_prices() {
        let s = series(&[
            (date(2024, 1, 1), 42000.0),
            (date(2024, 1, 2), 43150.5),
            (date(2024, 1, 3), 41800.25),
            (date(2024, 1, 4), 44010.0),
        ]);

        let image = render("bitcoin", &s, (800, 400)).unwrap();

        assert_eq!((image.width, image.height), (800, 400));
        assert_eq!(image.rgb.len(), 800 * 400 * 3);
        // White background with the blue series drawn over it
        assert_eq!(&image.rgb[..3], &[255, 255, 255]);
        assert!(image.rgb.chunks(3).any(|px| px == [0, 0, 255]));
    }

    #[test]
    fn test_render_single_point() {
        let s = series(&[(date(2024, 1, 1), 0.00001234)]);

        let image = render("dogecoin", &s, (320, 200)).unwrap();

        assert_eq!(image.rgb.len(), 320 * 200 * 3);
        assert!(image.rgb.chunks(3).any(|px| px == [0, 0, 255]));
    }
}
