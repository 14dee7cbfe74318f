pub mod glyphs;
pub mod palette;

pub use glyphs::icon_glyph;
pub use palette::{border_color, dim_color, luminance, mix};
