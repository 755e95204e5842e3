//! Fixed slide geometry, in inches.

/// Axis-aligned rectangle on a slide, measured in inches from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Page size of the presentation, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

/// 16:9 widescreen page.
pub const WIDESCREEN: SlideSize = SlideSize {
    width: 13.33,
    height: 7.5,
};

/// Title text box.
pub const TITLE_REGION: Rect = Rect::new(0.5, 0.3, 7.5, 1.0);

/// Body text box, the left column.
pub const BODY_REGION: Rect = Rect::new(0.5, 1.5, 7.2, 5.5);

/// Picture placement, the right column.
pub const IMAGE_REGION: Rect = Rect::new(8.2, 1.5, 4.5, 4.5);
