//! OPC package assembly: gathers slides and media and writes the ZIP.

use crate::assets::{ImageAsset, ImageFormat};
use crate::shape::xml_err;
use crate::slide::SlideDocument;
use crate::template;
use crate::units::slide_size_emu;
use deck_core::{Error, Result, SlideSize};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// First id in the slide id list; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Handle to an image stored in the package's media folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    /// File name under `ppt/media/`, e.g. `image1.png`.
    pub file_name: String,
    pub format: ImageFormat,
    /// Original file name, used as the picture description.
    pub description: String,
}

#[derive(Debug, Clone)]
struct MediaPart {
    file_name: String,
    data: Vec<u8>,
}

/// An in-memory presentation ready to be written as a `.pptx` package.
#[derive(Debug, Clone)]
pub struct PptxPackage {
    slide_size: SlideSize,
    slides: Vec<SlideDocument>,
    media: Vec<MediaPart>,
}

impl PptxPackage {
    /// Create an empty package with the given page size.
    pub fn new(slide_size: SlideSize) -> Self {
        Self {
            slide_size,
            slides: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Store image bytes in the media folder and return a handle for slides.
    pub fn add_media(&mut self, asset: ImageAsset) -> MediaRef {
        let file_name = format!(
            "image{}.{}",
            self.media.len() + 1,
            asset.format.extension()
        );
        self.media.push(MediaPart {
            file_name: file_name.clone(),
            data: asset.data,
        });

        MediaRef {
            file_name,
            format: asset.format,
            description: asset.name,
        }
    }

    /// Append a finished slide.
    pub fn push_slide(&mut self, slide: SlideDocument) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[SlideDocument] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// Write the complete package to `writer` and return it.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let deflated = FileOptions::default().compression_method(CompressionMethod::Deflated);
        // Images are already compressed.
        let stored = FileOptions::default().compression_method(CompressionMethod::Stored);

        let put = |zip: &mut ZipWriter<W>, name: &str, data: &[u8], options: FileOptions| -> Result<()> {
            zip.start_file(name, options)
                .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
            zip.write_all(data)?;
            Ok(())
        };

        put(&mut zip, "[Content_Types].xml", self.content_types_xml()?.as_bytes(), deflated)?;
        put(&mut zip, "_rels/.rels", template::root_rels_xml().as_bytes(), deflated)?;
        put(&mut zip, "docProps/core.xml", core_props_xml().as_bytes(), deflated)?;
        put(&mut zip, "docProps/app.xml", self.app_props_xml()?.as_bytes(), deflated)?;

        put(&mut zip, "ppt/presentation.xml", self.presentation_xml()?.as_bytes(), deflated)?;
        put(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            self.presentation_rels_xml()?.as_bytes(),
            deflated,
        )?;
        put(&mut zip, "ppt/presProps.xml", template::pres_props_xml().as_bytes(), deflated)?;
        put(&mut zip, "ppt/viewProps.xml", template::view_props_xml().as_bytes(), deflated)?;
        put(&mut zip, "ppt/tableStyles.xml", template::table_styles_xml().as_bytes(), deflated)?;
        put(&mut zip, "ppt/theme/theme1.xml", template::theme_xml().as_bytes(), deflated)?;

        put(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            template::slide_master_xml().as_bytes(),
            deflated,
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            template::slide_master_rels_xml().as_bytes(),
            deflated,
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            template::title_only_layout_xml().as_bytes(),
            deflated,
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            template::title_only_layout_rels_xml().as_bytes(),
            deflated,
        )?;

        for (idx, slide) in self.slides.iter().enumerate() {
            let number = idx + 1;
            put(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                slide.to_xml()?.as_bytes(),
                deflated,
            )?;
            put(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                slide.rels_xml()?.as_bytes(),
                deflated,
            )?;
        }

        for media in &self.media {
            put(&mut zip, &format!("ppt/media/{}", media.file_name), &media.data, stored)?;
        }

        log::debug!(
            "Wrote package with {} slides and {} media parts",
            self.slides.len(),
            self.media.len()
        );

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
        xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for format in [ImageFormat::Png, ImageFormat::Jpeg] {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                format.extension(),
                format.content_type()
            )
            .map_err(xml_err)?;
        }

        let overrides = [
            ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
            ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
            ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
            ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
            ("/ppt/presProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"),
            ("/ppt/viewProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"),
            ("/ppt/tableStyles.xml", "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"),
            ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
            ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
        ];
        for (part, content_type) in overrides {
            write!(xml, r#"<Override PartName="{}" ContentType="{}"/>"#, part, content_type)
                .map_err(xml_err)?;
        }

        for number in 1..=self.slides.len() {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                number
            )
            .map_err(xml_err)?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }

    /// Generate `ppt/presentation.xml`. Slide `n` (1-based) uses `rId{n+1}`.
    fn presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#
        ));

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        // An empty sldIdLst is invalid, so a deck without slides omits it.
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for idx in 0..self.slides.len() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    FIRST_SLIDE_ID + idx,
                    idx + 2
                )
                .map_err(xml_err)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        let (cx, cy) = slide_size_emu(self.slide_size);
        write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, cx, cy).map_err(xml_err)?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    fn presentation_rels_xml(&self) -> Result<String> {
        const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);

        let rel = |xml: &mut String, id: usize, kind: &str, target: &str| -> Result<()> {
            write!(
                xml,
                r#"<Relationship Id="rId{}" Type="{}/{}" Target="{}"/>"#,
                id, REL_BASE, kind, target
            )
            .map_err(xml_err)
        };

        rel(&mut xml, 1, "slideMaster", "slideMasters/slideMaster1.xml")?;
        for idx in 0..self.slides.len() {
            rel(&mut xml, idx + 2, "slide", &format!("slides/slide{}.xml", idx + 1))?;
        }

        let next = self.slides.len() + 2;
        rel(&mut xml, next, "presProps", "presProps.xml")?;
        rel(&mut xml, next + 1, "viewProps", "viewProps.xml")?;
        rel(&mut xml, next + 2, "theme", "theme/theme1.xml")?;
        rel(&mut xml, next + 3, "tableStyles", "tableStyles.xml")?;

        xml.push_str("</Relationships>");
        Ok(xml)
    }

    fn app_props_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties""#,
            r#" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
        ));
        write!(
            xml,
            "<Application>{}</Application>",
            escape(concat!("deck-render ", env!("CARGO_PKG_VERSION")))
        )
        .map_err(xml_err)?;
        write!(xml, "<Slides>{}</Slides>", self.slides.len()).map_err(xml_err)?;
        xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
        xml.push_str("</Properties>");
        Ok(xml)
    }
}

fn core_props_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        "<dc:creator>deck-render</dc:creator>",
        "<cp:lastModifiedBy>deck-render</cp:lastModifiedBy>",
        "<cp:revision>1</cp:revision>",
        "</cp:coreProperties>"
    )
}
