//! Conversions to DrawingML units.

use deck_core::{Rect, SlideSize};

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// English Metric Units per point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Convert inches to EMU.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// Convert points to hundredths of a point, the unit of `sz` and `spcPts`.
pub fn centipoints(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

/// A rectangle in EMU, as written to `<a:off>` and `<a:ext>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmuRect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl From<Rect> for EmuRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: inches(rect.x),
            y: inches(rect.y),
            cx: inches(rect.width),
            cy: inches(rect.height),
        }
    }
}

/// Slide size in EMU as `(cx, cy)`.
pub fn slide_size_emu(size: SlideSize) -> (i64, i64) {
    (inches(size.width), inches(size.height))
}
