//! Domain types describing the deck to render.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An ordered collection of slides forming one output presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<SlideSpec>,
}

impl Deck {
    /// Create a deck from slides in presentation order.
    pub fn new(slides: Vec<SlideSpec>) -> Self {
        Self { slides }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Titles of all slides, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.title.as_str()).collect()
    }

    /// Parse a deck from its JSON description.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidDeck(e.to_string()))
    }

    /// Load a deck from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded deck description from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Serialize the deck to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidDeck(e.to_string()))
    }
}

/// Description of a single slide: title, body lines and an optional image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Slide title text.
    pub title: String,

    /// Image shown in the right-hand column, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,

    /// Body lines in reading order.
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

impl SlideSpec {
    /// Create a slide with a title and no body or image.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_path: None,
            lines: Vec::new(),
        }
    }

    /// Set the image for this slide.
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Append a body line.
    pub fn with_line(mut self, line: LineSpec) -> Self {
        self.lines.push(line);
        self
    }

    /// Body lines as they appear on the rendered slide.
    ///
    /// A single leading empty line is dropped so the body never opens with a
    /// blank paragraph. Empty lines anywhere else are kept as spacers.
    pub fn body_lines(&self) -> &[LineSpec] {
        match self.lines.split_first() {
            Some((first, rest)) if first.is_spacer() => rest,
            _ => &self.lines,
        }
    }
}

/// One line of slide body text with its styling flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    pub text: String,

    #[serde(default)]
    pub is_header: bool,

    #[serde(default)]
    pub is_highlight: bool,
}

impl LineSpec {
    pub fn new(text: impl Into<String>, is_header: bool, is_highlight: bool) -> Self {
        Self {
            text: text.into(),
            is_header,
            is_highlight,
        }
    }

    /// A plain body line.
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    /// A section header line.
    pub fn header(text: impl Into<String>) -> Self {
        Self::new(text, true, false)
    }

    /// An empty spacing line.
    pub fn spacer() -> Self {
        Self::new("", false, false)
    }

    /// Whether this line only adds vertical space.
    pub fn is_spacer(&self) -> bool {
        self.text.is_empty()
    }
}
