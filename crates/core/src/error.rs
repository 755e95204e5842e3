//! Error types for deck rendering.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or rendering a deck.
///
/// A missing or unsupported image is deliberately absent here: the renderer
/// skips such images and reports them in its summary instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input or write the output file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The deck description could not be parsed.
    #[error("Invalid deck description: {0}")]
    InvalidDeck(String),

    /// ZIP container error while writing or reading a package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    XmlError(String),

    /// A package read back for verification is missing required parts.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),
}
