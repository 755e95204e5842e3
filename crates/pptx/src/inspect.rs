//! Read-back of decks written by [`crate::DeckRenderer`].
//!
//! Recovers slide order, titles, body paragraphs with their formatting, and
//! picture placement, so a written file can be checked against its deck.

use deck_core::{Error, Result, Rgb};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Everything recovered from a written deck.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckOutline {
    pub slides: Vec<SlideOutline>,
}

impl DeckOutline {
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.title.as_str()).collect()
    }
}

/// One slide as found in the package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,
    pub title: String,
    /// Paragraphs of the body text box, in order.
    pub body: Vec<ParagraphOutline>,
    pub pictures: Vec<PictureOutline>,
}

/// Text and formatting of a single paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphOutline {
    pub text: String,
    pub size_pt: Option<f64>,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub space_after_pt: Option<f64>,
}

/// Picture placement in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PictureOutline {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Reader for packages produced by this crate.
pub struct DeckInspector;

impl DeckInspector {
    pub fn new() -> Self {
        Self
    }

    /// Inspect a written `.pptx` package.
    pub fn inspect<R: Read + Seek>(&self, reader: R) -> Result<DeckOutline> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut outline = DeckOutline::default();
        let slide_order = self.get_slide_order(&mut archive)?;

        for (idx, slide_path) in slide_order.iter().enumerate() {
            let content = self.read_file_from_archive(&mut archive, slide_path)?;
            let mut slide = parse_slide_xml(&content)?;
            slide.number = idx + 1;
            outline.slides.push(slide);
        }

        Ok(outline)
    }

    /// Inspect a written `.pptx` file on disk.
    pub fn inspect_path(&self, path: &std::path::Path) -> Result<DeckOutline> {
        let file = std::fs::File::open(path)?;
        self.inspect(std::io::BufReader::new(file))
    }

    /// Ordered slide part paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"Relationship" => {
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut id = String::new();

                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"Type" => rel_type = value,
                            b"Target" => target = value,
                            b"Id" => id = value,
                            _ => {}
                        }
                    }

                    if rel_type.ends_with("/slide") {
                        let order_num = extract_slide_number(&id).or_else(|| extract_slide_number(&target));
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!("Error parsing relationships: {}", e)));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    fn read_file_from_archive<R: Read + Seek>(&self, archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::CorruptedFile(format!("Part not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for DeckInspector {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape being collected while walking a slide.
enum PendingShape {
    Text(Vec<ParagraphOutline>),
    Picture(PictureOutline),
}

/// Walk a slide part and collect its text boxes and pictures.
///
/// The first text box is the title, the second the body.
fn parse_slide_xml(xml: &str) -> Result<SlideOutline> {
    let mut reader = Reader::from_str(xml);

    let mut text_boxes: Vec<Vec<ParagraphOutline>> = Vec::new();
    let mut pictures = Vec::new();

    let mut shape: Option<PendingShape> = None;
    let mut paragraph: Option<ParagraphOutline> = None;
    let mut in_text = false;
    let mut in_space_after = false;
    let mut in_run_props = false;
    let mut run_props_seen = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::XmlError(format!("Error parsing slide: {}", e)))?;

        match event {
            Event::Start(ref e) => match local_name(e.name().as_ref()) {
                b"sp" => shape = Some(PendingShape::Text(Vec::new())),
                b"pic" => shape = Some(PendingShape::Picture(PictureOutline::default())),
                b"p" => {
                    paragraph = Some(ParagraphOutline::default());
                    run_props_seen = false;
                }
                b"spcAft" => in_space_after = true,
                b"rPr" | b"endParaRPr" => {
                    in_run_props = !run_props_seen;
                    apply_run_props(e, paragraph.as_mut(), &mut run_props_seen);
                }
                b"t" => in_text = true,
                b"br" => push_line_break(paragraph.as_mut()),
                _ => {}
            },
            Event::Empty(ref e) => match local_name(e.name().as_ref()) {
                // A bare <a:p/> only satisfies the schema and carries no content.
                b"p" => {}
                b"br" => push_line_break(paragraph.as_mut()),
                b"off" => {
                    if let Some(PendingShape::Picture(ref mut pic)) = shape {
                        pic.x = attr_i64(e, b"x").unwrap_or_default();
                        pic.y = attr_i64(e, b"y").unwrap_or_default();
                    }
                }
                b"ext" => {
                    if let Some(PendingShape::Picture(ref mut pic)) = shape {
                        pic.cx = attr_i64(e, b"cx").unwrap_or_default();
                        pic.cy = attr_i64(e, b"cy").unwrap_or_default();
                    }
                }
                b"spcPts" if in_space_after => {
                    if let Some(ref mut p) = paragraph {
                        p.space_after_pt = attr_i64(e, b"val").map(|v| v as f64 / 100.0);
                    }
                }
                b"rPr" | b"endParaRPr" => {
                    apply_run_props(e, paragraph.as_mut(), &mut run_props_seen);
                }
                b"srgbClr" if in_run_props => {
                    if let Some(ref mut p) = paragraph {
                        p.color = attr_string(e, b"val").and_then(|v| Rgb::from_hex(&v));
                    }
                }
                _ => {}
            },
            Event::Text(ref e) => {
                if in_text {
                    if let Some(ref mut p) = paragraph {
                        let text = e
                            .unescape()
                            .map_err(|err| Error::XmlError(format!("Bad text content: {}", err)))?;
                        p.text.push_str(&text);
                    }
                }
            }
            Event::End(ref e) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"spcAft" => in_space_after = false,
                b"rPr" | b"endParaRPr" => in_run_props = false,
                b"p" => {
                    if let (Some(p), Some(PendingShape::Text(paragraphs))) = (paragraph.take(), shape.as_mut()) {
                        paragraphs.push(p);
                    }
                }
                b"sp" | b"pic" => match shape.take() {
                    Some(PendingShape::Text(paragraphs)) => text_boxes.push(paragraphs),
                    Some(PendingShape::Picture(pic)) => pictures.push(pic),
                    None => {}
                },
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let mut boxes = text_boxes.into_iter();
    let title = boxes
        .next()
        .map(|paragraphs| {
            paragraphs
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();
    let body = boxes.next().unwrap_or_default();

    Ok(SlideOutline {
        number: 0,
        title,
        body,
        pictures,
    })
}

fn push_line_break(paragraph: Option<&mut ParagraphOutline>) {
    if let Some(p) = paragraph {
        p.text.push('\n');
    }
}

/// Record size and weight from the first run-properties element of a paragraph.
fn apply_run_props(e: &BytesStart, paragraph: Option<&mut ParagraphOutline>, seen: &mut bool) {
    let Some(p) = paragraph else {
        return;
    };
    if *seen {
        return;
    }
    *seen = true;

    p.size_pt = attr_i64(e, b"sz").map(|v| v as f64 / 100.0);
    p.bold = matches!(attr_string(e, b"b").as_deref(), Some("1") | Some("true"));
}

fn attr_string(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

fn attr_i64(e: &BytesStart, key: &[u8]) -> Option<i64> {
    attr_string(e, key).and_then(|v| v.parse().ok())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}
