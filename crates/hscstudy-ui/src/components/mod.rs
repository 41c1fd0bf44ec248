//! Reusable UI components for the study site
//!
//! Class names match the selectors in the desktop app's global stylesheet.

mod button;
mod flashcard_tile;
mod progress_bar;
mod quiz_option;
mod search_input;
mod section_tabs;

pub use button::*;
pub use flashcard_tile::*;
pub use progress_bar::*;
pub use quiz_option::*;
pub use search_input::*;
pub use section_tabs::*;
