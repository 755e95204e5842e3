//! Text formatting rules for titles and body lines.

use crate::types::LineSpec;
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse six hex digits such as `003366`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Accent color for titles and plain section headers.
pub const BRAND_NAVY: Rgb = Rgb(0, 51, 102);

/// Color for highlighted lines.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Character and paragraph formatting applied to one paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in points.
    pub size_pt: f64,
    pub bold: bool,
    /// Explicit text color; `None` inherits the theme default.
    pub color: Option<Rgb>,
    /// Space after the paragraph in points.
    pub space_after_pt: f64,
}

/// Formatting of every slide title.
pub const TITLE_STYLE: ParagraphStyle = ParagraphStyle {
    size_pt: 40.0,
    bold: true,
    color: Some(BRAND_NAVY),
    space_after_pt: 0.0,
};

impl ParagraphStyle {
    /// Look up the body formatting for a line by its header/highlight flags.
    pub fn for_line(line: &LineSpec) -> Self {
        match (line.is_header, line.is_highlight) {
            (true, true) => Self {
                size_pt: 28.0,
                bold: true,
                color: Some(BLACK),
                space_after_pt: 12.0,
            },
            (false, true) => Self {
                size_pt: 22.0,
                bold: true,
                color: Some(BLACK),
                space_after_pt: 10.0,
            },
            (true, false) => Self {
                size_pt: 28.0,
                bold: true,
                color: Some(BRAND_NAVY),
                space_after_pt: 10.0,
            },
            (false, false) => Self {
                size_pt: 22.0,
                bold: false,
                color: None,
                space_after_pt: 6.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(BRAND_NAVY.to_string(), "003366");
        assert_eq!(BLACK.to_string(), "000000");
        assert_eq!(Rgb::from_hex("003366"), Some(BRAND_NAVY));
        assert_eq!(Rgb::from_hex("ffFFff"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::from_hex("0033"), None);
        assert_eq!(Rgb::from_hex("zz3366"), None);
    }

    #[test]
    fn test_rule_table() {
        let header_highlight = ParagraphStyle::for_line(&LineSpec::new("x", true, true));
        assert_eq!(header_highlight.size_pt, 28.0);
        assert!(header_highlight.bold);
        assert_eq!(header_highlight.color, Some(BLACK));
        assert_eq!(header_highlight.space_after_pt, 12.0);

        let highlight = ParagraphStyle::for_line(&LineSpec::new("x", false, true));
        assert_eq!(highlight.size_pt, 22.0);
        assert!(highlight.bold);
        assert_eq!(highlight.color, Some(BLACK));
        assert_eq!(highlight.space_after_pt, 10.0);

        let header = ParagraphStyle::for_line(&LineSpec::header("x"));
        assert_eq!(header.size_pt, 28.0);
        assert!(header.bold);
        assert_eq!(header.color, Some(BRAND_NAVY));
        assert_eq!(header.space_after_pt, 10.0);

        let body = ParagraphStyle::for_line(&LineSpec::body("x"));
        assert_eq!(body.size_pt, 22.0);
        assert!(!body.bold);
        assert_eq!(body.color, None);
        assert_eq!(body.space_after_pt, 6.0);
    }

    #[test]
    fn test_spacer_uses_body_style() {
        assert_eq!(
            ParagraphStyle::for_line(&LineSpec::spacer()),
            ParagraphStyle::for_line(&LineSpec::body("text"))
        );
    }
}
