//! A single slide part and its relationships.

use crate::package::MediaRef;
use crate::shape::{xml_err, Shape, TextFrame};
use crate::units::EmuRect;
use deck_core::{Rect, Result};
use std::fmt::Write as FmtWrite;

/// Relationship id of the slide layout in every slide's rels part.
const LAYOUT_REL_ID: &str = "rId1";

/// Shape tree of one slide, plus the picture relationships it needs.
#[derive(Debug, Clone)]
pub struct SlideDocument {
    shapes: Vec<Shape>,
    /// `(relationship id, target)` for each embedded picture.
    image_rels: Vec<(String, String)>,
    /// Next shape id; id 1 is the shape tree root.
    next_id: u32,
}

impl SlideDocument {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            image_rels: Vec::new(),
            next_id: 2,
        }
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a text box holding `frame`.
    pub fn add_text_box(&mut self, name: &str, rect: Rect, frame: TextFrame) {
        let id = self.take_id();
        self.shapes.push(Shape::TextBox {
            id,
            name: format!("{} {}", name, id),
            rect: EmuRect::from(rect),
            frame,
        });
    }

    /// Place an image that has been added to the package.
    pub fn add_picture(&mut self, media: &MediaRef, rect: Rect) {
        let id = self.take_id();
        let rel_id = format!("rId{}", self.image_rels.len() + 2);
        self.image_rels
            .push((rel_id.clone(), format!("../media/{}", media.file_name)));

        self.shapes.push(Shape::Picture {
            id,
            name: format!("Picture {}", id),
            rect: EmuRect::from(rect),
            rel_id,
            description: media.description.clone(),
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn picture_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_picture()).count()
    }

    /// Text of the first paragraph of the first text box.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .iter()
            .find_map(|s| s.text_frame())
            .and_then(|f| f.paragraphs().first())
            .map(|p| p.text.as_str())
    }

    /// Generate the slide part XML.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#
        ));
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(concat!(
            "<p:grpSpPr><a:xfrm>",
            r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
            "</a:xfrm></p:grpSpPr>"
        ));

        for shape in &self.shapes {
            shape.write_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }

    /// Generate the slide's relationships part XML.
    pub fn rels_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
        write!(
            xml,
            r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
            LAYOUT_REL_ID
        )
        .map_err(xml_err)?;

        for (rel_id, target) in &self.image_rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="{}"/>"#,
                rel_id, target
            )
            .map_err(xml_err)?;
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

impl Default for SlideDocument {
    fn default() -> Self {
        Self::new()
    }
}
