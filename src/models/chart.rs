//! Rendered chart models

/// RGB pixels of a rendered chart, row-major, 3 bytes per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// A chart ready for the viewer window
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub asset_id: String,
    pub title: String,
    pub image: ChartImage,
}
