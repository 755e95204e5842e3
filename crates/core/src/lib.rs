//! Core deck types, formatting rules, slide geometry and the built-in
//! "AI Agents Overview" content.

pub mod content;
pub mod error;
pub mod layout;
pub mod style;
pub mod types;

pub use content::{ai_agents_overview, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use layout::{Rect, SlideSize};
pub use style::{ParagraphStyle, Rgb};
pub use types::{Deck, LineSpec, SlideSpec};
