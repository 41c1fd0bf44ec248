//! UI components for the study site.

mod chapter_card;
mod content_modal;
mod content_views;
mod nav_header;

pub use chapter_card::ChapterCard;
pub use content_modal::ContentModal;
pub use content_views::{FlashcardsPanel, KeyPointsPanel, MindMapPanel, QuizPanel, SummaryPanel};
pub use nav_header::NavHeader;
