//! Study state context for the desktop app.
//!
//! The root [`App`](crate::app::App) owns a `Signal<StudyApp>` and provides it
//! to every component.
//!
//! ## Usage
//!
//! ```ignore
//! let mut study = use_study();
//!
//! // Read state
//! let dark = study.read().is_dark();
//!
//! // Mutate from an event handler
//! study.write().toggle_dark();
//! ```

use dioxus::prelude::*;
use hscstudy_core::{AppConfig, Dataset, MemoryStore, PreferenceStore, Storage, StudyApp};

/// Get the configuration passed on the command line.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Build the application state from the configuration.
///
/// Load failures never abort startup: an unreadable dataset falls back to the
/// empty default and an unavailable database to in-memory preferences.
pub fn init_study(config: &AppConfig) -> StudyApp {
    let raw = config.load_dataset().unwrap_or_else(|e| {
        tracing::error!("Failed to load dataset: {}", e);
        Dataset::empty_sections()
    });

    let store: Box<dyn PreferenceStore> = match Storage::new(config.storage_path()) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("Preferences will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    StudyApp::init(&raw, store)
}

/// Hook to access the study state from context.
pub fn use_study() -> Signal<StudyApp> {
    use_context::<Signal<StudyApp>>()
}
