//! Image assets placed on slides.
//!
//! Images are never decoded: the probe only checks the extension against an
//! allow-list and that the file can be read, then carries the raw bytes into
//! the package.

use std::path::Path;

/// Image formats accepted for slide pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Detect format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Extension used for the media part inside the package.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// An image file that passed the probe, with its bytes loaded.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub format: ImageFormat,
    pub data: Vec<u8>,
    /// File name used as the picture description.
    pub name: String,
}

impl ImageAsset {
    /// Load an image if it has an allowed extension and exists.
    ///
    /// Returns `None` for anything else. A missing or unsupported image is not
    /// an error; callers skip the picture and keep rendering.
    pub fn probe(path: &Path) -> Option<Self> {
        let format = match path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
        {
            Some(format) => format,
            None => {
                log::debug!("Skipping image with unsupported extension: {}", path.display());
                return None;
            }
        };

        if !path.is_file() {
            log::debug!("Skipping missing image: {}", path.display());
            return None;
        }

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Skipping unreadable image {}: {}", path.display(), e);
                return None;
            }
        };

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        Some(Self { format, data, name })
    }
}
