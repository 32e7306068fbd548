//! Glyph catalog, renderer and configuration for blocktext

pub mod config;
pub mod font;
pub mod render;

pub use font::GLYPH_HEIGHT;
pub use render::render;
