//! Theme: color palettes and the global stylesheet.

mod colors;
mod styles;

pub use colors::palette_styles;
pub use styles::GLOBAL_STYLES;
