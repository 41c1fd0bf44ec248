//! HSC Study Core Library
//!
//! Content enrichment, quiz and flashcard state machines for an HSC English
//! revision site.
//!
//! ## Overview
//!
//! The study site organizes content into four sections (prose, poetry,
//! writing, novel). Each content item can be viewed as a summary, key points,
//! a multiple-choice quiz, a flashcard deck or a mind map. Before anything is
//! displayed the raw dataset is enriched so every item has at least 12
//! questions and 16 flashcards.
//!
//! ## Core Principles
//!
//! - **Pure enrichment**: `enrich` never mutates its input
//! - **Typed state**: quiz and flashcard interactions are explicit state machines
//! - **Local preferences**: the dark-mode flag persists in a redb file
//!
//! ## Quick Start
//!
//! ```ignore
//! use hscstudy_core::{DisplayMode, MemoryStore, Section, StudyApp};
//!
//! let raw = hscstudy_core::Dataset::from_json(r#"{ "poetry": [{ "title": "Ozymandias" }] }"#)?;
//! let mut app = StudyApp::init(&raw, Box::new(MemoryStore::new()));
//!
//! app.open(Section::Poetry, 0, DisplayMode::Mcq);
//! app.select_option(0, 0);
//! println!("Score: {}", app.score_quiz().unwrap());
//! ```

pub mod app;
pub mod config;
pub mod enrich;
pub mod error;
pub mod flashcards;
pub mod logging;
pub mod navigation;
pub mod preferences;
pub mod presenter;
pub mod progress;
pub mod quiz;
pub mod search;
pub mod storage;
pub mod types;

// Re-exports
pub use app::{OpenContent, StudyApp, Widget};
pub use config::AppConfig;
pub use enrich::{enrich, MIN_FLASHCARDS, MIN_MCQS};
pub use error::{StudyError, StudyResult};
pub use flashcards::{Face, FlashcardDeck};
pub use navigation::{ChapterCard, NavTarget, Navigator, Tab};
pub use preferences::ThemePreference;
pub use presenter::{present, present_at, ContentView, DisplayMode};
pub use progress::Progress;
pub use quiz::{Answer, OptionMark, QuestionGroup, Quiz, Score};
pub use storage::{MemoryStore, PreferenceStore, Storage};
pub use types::*;
