//! PPTX (Office Open XML) writer backend for deck rendering.
//!
//! Builds slides in memory and writes them as a ZIP package of XML parts.

pub mod assets;
pub mod inspect;
pub mod package;
pub mod render;
pub mod shape;
pub mod slide;
pub mod template;
pub mod units;

pub use assets::{ImageAsset, ImageFormat};
pub use inspect::{DeckInspector, DeckOutline, SlideOutline};
pub use package::PptxPackage;
pub use render::{render, DeckRenderer, RenderSummary};
pub use shape::normalize_text;
