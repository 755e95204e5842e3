//! Shapes placed on a slide and their DrawingML serialization.

use crate::units::{centipoints, EmuRect};
use deck_core::{Error, ParagraphStyle, Result};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// A single styled paragraph inside a text frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: ParagraphStyle,
}

/// Ordered paragraphs of a text box.
///
/// A new frame holds no paragraphs at all, so the first paragraph added is
/// the first one rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>, style: ParagraphStyle) {
        self.paragraphs.push(Paragraph {
            text: text.into(),
            style,
        });
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            // A text body must hold at least one paragraph.
            xml.push_str("<a:p/>");
        }

        for paragraph in &self.paragraphs {
            write_paragraph(xml, paragraph)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub enum Shape {
    TextBox {
        id: u32,
        name: String,
        rect: EmuRect,
        frame: TextFrame,
    },
    Picture {
        id: u32,
        name: String,
        rect: EmuRect,
        /// Relationship id of the embedded image in the slide's rels part.
        rel_id: String,
        description: String,
    },
}

impl Shape {
    pub fn id(&self) -> u32 {
        match self {
            Self::TextBox { id, .. } | Self::Picture { id, .. } => *id,
        }
    }

    pub fn rect(&self) -> EmuRect {
        match self {
            Self::TextBox { rect, .. } | Self::Picture { rect, .. } => *rect,
        }
    }

    pub fn is_picture(&self) -> bool {
        matches!(self, Self::Picture { .. })
    }

    /// Text frame of a text box.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match self {
            Self::TextBox { frame, .. } => Some(frame),
            Self::Picture { .. } => None,
        }
    }

    /// Append this shape's XML to `xml`.
    pub fn write_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            Self::TextBox {
                id,
                name,
                rect,
                frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, id, escape(&attr_text(name)))
                    .map_err(xml_err)?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                frame.write_xml(xml)?;
                xml.push_str("</p:sp>");
            }
            Self::Picture {
                id,
                name,
                rect,
                rel_id,
                description,
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
                    id,
                    escape(&attr_text(name)),
                    escape(&attr_text(description))
                )
                .map_err(xml_err)?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id).map_err(xml_err)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            }
        }

        Ok(())
    }
}

/// Text as it appears in the written package.
///
/// `\r\n`, `\r`, `\n` and vertical tab all become `\n`, which the writer
/// turns into `<a:br>` line breaks. Characters XML 1.0 cannot carry are
/// replaced with `_xHHHH_`. Reading a deck back yields exactly this string.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\n' | '\u{000B}' => out.push('\n'),
            '\t' => out.push(c),
            c if is_xml_forbidden(c) => out.push_str(&format!("_x{:04X}_", c as u32)),
            c => out.push(c),
        }
    }

    out
}

/// Attribute values keep no line breaks.
fn attr_text(text: &str) -> String {
    normalize_text(text).replace('\n', " ")
}

fn is_xml_forbidden(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{FFFE}' | '\u{FFFF}')
}

pub(crate) fn xml_err(e: std::fmt::Error) -> Error {
    Error::XmlError(e.to_string())
}

fn write_xfrm(xml: &mut String, rect: &EmuRect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y).map_err(xml_err)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.cx, rect.cy).map_err(xml_err)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    let style = &paragraph.style;
    xml.push_str("<a:p>");

    if style.space_after_pt > 0.0 {
        write!(
            xml,
            r#"<a:pPr><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
            centipoints(style.space_after_pt)
        )
        .map_err(xml_err)?;
    }

    // Empty paragraphs carry their size on endParaRPr so spacer lines keep
    // the height of the surrounding text.
    if !paragraph.text.is_empty() {
        let text = normalize_text(&paragraph.text);
        for (idx, segment) in text.split('\n').enumerate() {
            if idx > 0 {
                xml.push_str("<a:br>");
                write_run_properties(xml, "a:rPr", style)?;
                xml.push_str("</a:br>");
            }
            if segment.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", style)?;
            write!(xml, "<a:t>{}</a:t>", escape(segment)).map_err(xml_err)?;
            xml.push_str("</a:r>");
        }
    }
    write_run_properties(xml, "a:endParaRPr", style)?;

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, style: &ParagraphStyle) -> Result<()> {
    write!(
        xml,
        r#"<{} lang="en-US" sz="{}" b="{}" dirty="0""#,
        tag,
        centipoints(style.size_pt),
        if style.bold { 1 } else { 0 }
    )
    .map_err(xml_err)?;

    match style.color {
        Some(color) => {
            write!(
                xml,
                r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></{}>"#,
                color, tag
            )
            .map_err(xml_err)?;
        }
        None => xml.push_str("/>"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::style::{BRAND_NAVY, TITLE_STYLE};
    use deck_core::LineSpec;

    fn body_style() -> ParagraphStyle {
        ParagraphStyle::for_line(&LineSpec::body("x"))
    }

    fn rect() -> EmuRect {
        EmuRect {
            x: 1,
            y: 2,
            cx: 3,
            cy: 4,
        }
    }

    #[test]
    fn test_new_frame_is_empty() {
        assert!(TextFrame::new().paragraphs().is_empty());
    }

    #[test]
    fn test_paragraph_xml_escapes_text() {
        let mut xml = String::new();
        let paragraph = Paragraph {
            text: "Work & <Play>".to_string(),
            style: body_style(),
        };
        write_paragraph(&mut xml, &paragraph).unwrap();

        assert!(xml.contains("<a:t>Work &amp; &lt;Play&gt;</a:t>"));
        assert!(xml.contains(r#"<a:spcPts val="600"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="2200" b="0" dirty="0"/>"#));
    }

    #[test]
    fn test_empty_paragraph_has_no_run() {
        let mut xml = String::new();
        let paragraph = Paragraph {
            text: String::new(),
            style: body_style(),
        };
        write_paragraph(&mut xml, &paragraph).unwrap();

        assert!(!xml.contains("<a:r>"));
        assert!(xml.contains("<a:endParaRPr"));
    }

    #[test]
    fn test_title_style_xml() {
        let mut frame = TextFrame::new();
        frame.add_paragraph("Title", TITLE_STYLE);
        let shape = Shape::TextBox {
            id: 2,
            name: "Title".to_string(),
            rect: rect(),
            frame,
        };

        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();

        assert!(xml.starts_with("<p:sp>"));
        assert!(xml.contains(r#"sz="4000" b="1""#));
        assert!(xml.contains(&format!(r#"<a:srgbClr val="{}"/>"#, BRAND_NAVY)));
        assert!(xml.contains(r#"<a:off x="1" y="2"/>"#));
        assert!(xml.contains(r#"<a:ext cx="3" cy="4"/>"#));
        // Title has no spacing after.
        assert!(!xml.contains("<a:spcAft>"));
    }

    #[test]
    fn test_empty_frame_writes_placeholder_paragraph() {
        let shape = Shape::TextBox {
            id: 3,
            name: "Body".to_string(),
            rect: rect(),
            frame: TextFrame::new(),
        };

        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
    }

    #[test]
    fn test_picture_xml() {
        let shape = Shape::Picture {
            id: 4,
            name: "Picture 4".to_string(),
            rect: rect(),
            rel_id: "rId2".to_string(),
            description: "a&b.png".to_string(),
        };

        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();

        assert!(shape.is_picture());
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains(r#"descr="a&amp;b.png""#));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("plain"), "plain");
        assert_eq!(normalize_text("a\u{000B}b\r\nc\rd"), "a\nb\nc\nd");
        assert_eq!(normalize_text("bell\u{0007}\tend"), "bell_x0007_\tend");
        assert_eq!(normalize_text("\u{0000}\u{FFFF}"), "_x0000__xFFFF_");
    }

    #[test]
    fn test_line_breaks_become_br() {
        let mut xml = String::new();
        let paragraph = Paragraph {
            text: "line1\nline2\u{0001}".to_string(),
            style: body_style(),
        };
        write_paragraph(&mut xml, &paragraph).unwrap();

        assert!(xml.contains("<a:t>line1</a:t></a:r><a:br><a:rPr "));
        assert!(xml.contains("</a:br><a:r>"));
        assert!(xml.contains("<a:t>line2_x0001_</a:t>"));
        assert!(!xml.contains('\n'));
        assert!(!xml.contains('\u{0001}'));
    }

    #[test]
    fn test_picture_description_drops_control_chars() {
        let shape = Shape::Picture {
            id: 4,
            name: "Picture 4".to_string(),
            rect: rect(),
            rel_id: "rId2".to_string(),
            description: "a\nb\u{0007}.png".to_string(),
        };

        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"descr="a b_x0007_.png""#));
    }
}
