//! Deck renderer: turns a [`Deck`] into a `.pptx` presentation.

use crate::assets::ImageAsset;
use crate::package::PptxPackage;
use crate::shape::TextFrame;
use crate::slide::SlideDocument;
use deck_core::layout::{BODY_REGION, IMAGE_REGION, TITLE_REGION, WIDESCREEN};
use deck_core::style::TITLE_STYLE;
use deck_core::{Deck, ParagraphStyle, Result, SlideSpec};
use serde::Serialize;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub slide_count: usize,
    pub picture_count: usize,
    /// Image paths that were missing or had an unsupported extension.
    pub skipped_images: Vec<PathBuf>,
    /// Size of the written package; zero when rendering to a writer.
    pub bytes_written: u64,
}

/// Renders decks onto 16:9 slides with a fixed two-column layout.
#[derive(Debug, Clone)]
pub struct DeckRenderer {
    asset_root: PathBuf,
}

impl DeckRenderer {
    /// Create a renderer that resolves image paths against the current directory.
    pub fn new() -> Self {
        Self {
            asset_root: PathBuf::from("."),
        }
    }

    /// Resolve relative image paths against `root`.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Render `deck` and write it to `output_path`, replacing any existing file.
    ///
    /// The package is assembled in memory and written with a single write.
    pub fn render(&self, deck: &Deck, output_path: &Path) -> Result<RenderSummary> {
        let (package, mut summary) = self.build(deck);
        let bytes = package.write_to(Cursor::new(Vec::new()))?.into_inner();

        std::fs::write(output_path, &bytes)?;
        summary.bytes_written = bytes.len() as u64;

        log::info!(
            "Rendered {} slides to {} ({} bytes)",
            summary.slide_count,
            output_path.display(),
            summary.bytes_written
        );
        Ok(summary)
    }

    /// Render `deck` into any seekable writer.
    pub fn render_to_writer<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<(W, RenderSummary)> {
        let (package, summary) = self.build(deck);
        let writer = package.write_to(writer)?;
        Ok((writer, summary))
    }

    /// Lay out every slide of the deck, in order.
    pub fn build(&self, deck: &Deck) -> (PptxPackage, RenderSummary) {
        let mut package = PptxPackage::new(WIDESCREEN);
        let mut summary = RenderSummary::default();

        for (idx, spec) in deck.slides.iter().enumerate() {
            log::debug!("Rendering slide {}: {}", idx + 1, spec.title);
            let slide = self.build_slide(spec, &mut package, &mut summary);
            summary.picture_count += slide.picture_count();
            package.push_slide(slide);
        }

        summary.slide_count = package.slide_count();
        (package, summary)
    }

    fn build_slide(
        &self,
        spec: &SlideSpec,
        package: &mut PptxPackage,
        summary: &mut RenderSummary,
    ) -> SlideDocument {
        let mut slide = SlideDocument::new();

        let mut title = TextFrame::new();
        title.add_paragraph(spec.title.as_str(), TITLE_STYLE);
        slide.add_text_box("Title", TITLE_REGION, title);

        let mut body = TextFrame::new();
        for line in spec.body_lines() {
            body.add_paragraph(line.text.as_str(), ParagraphStyle::for_line(line));
        }
        slide.add_text_box("Content", BODY_REGION, body);

        if let Some(image_path) = &spec.image_path {
            match ImageAsset::probe(&self.asset_root.join(image_path)) {
                Some(asset) => {
                    let media = package.add_media(asset);
                    slide.add_picture(&media, IMAGE_REGION);
                }
                None => summary.skipped_images.push(image_path.clone()),
            }
        }

        slide
    }
}

impl Default for DeckRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `deck` to `output_path` with images resolved against the current directory.
pub fn render(deck: &Deck, output_path: &Path) -> Result<RenderSummary> {
    DeckRenderer::new().render(deck, output_path)
}
