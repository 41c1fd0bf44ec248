//! Dark-mode preference.
//!
//! Read once at startup and rewritten on every toggle. Storage failures are
//! logged and otherwise ignored: a failed read behaves like "never stored",
//! a failed write keeps the in-memory state.

use tracing::{info, warn};

use crate::storage::PreferenceStore;

/// Storage key of the dark-mode flag
pub const DARK_MODE_KEY: &str = "dark";

/// Value used when nothing has been stored
pub const DARK_MODE_DEFAULT: bool = false;

pub struct ThemePreference {
    dark: bool,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Restore the flag from `store`, defaulting to light mode.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let dark = read_flag(store.as_ref(), DARK_MODE_KEY).unwrap_or(DARK_MODE_DEFAULT);
        info!(dark, "theme preference restored");
        Self { dark, store }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Class applied to the document root while dark mode is on
    pub fn root_class(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            ""
        }
    }

    /// Flip the flag, persist it, and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        write_flag(self.store.as_ref(), DARK_MODE_KEY, self.dark);
        info!(dark = self.dark, "theme toggled");
        self.dark
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

fn read_flag(store: &dyn PreferenceStore, key: &str) -> Option<bool> {
    let bytes = match store.load_preference(key) {
        Ok(bytes) => bytes?,
        Err(e) => {
            warn!(key, "failed to read preference: {}", e);
            return None;
        }
    };
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        // Non-boolean values are read by JSON truthiness
        Ok(value) => Some(is_truthy(&value)),
        Err(e) => {
            warn!(key, "ignoring unreadable preference: {}", e);
            None
        }
    }
}

fn write_flag(store: &dyn PreferenceStore, key: &str, value: bool) {
    let result = serde_json::to_vec(&value)
        .map_err(Into::into)
        .and_then(|bytes| store.save_preference(key, &bytes));
    if let Err(e) = result {
        warn!(key, "failed to persist preference: {}", e);
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudyError;
    use crate::storage::{MemoryStore, Storage};
    use tempfile::TempDir;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load_preference(&self, _key: &str) -> Result<Option<Vec<u8>>, StudyError> {
            Err(StudyError::Serialization("disk on fire".to_string()))
        }

        fn save_preference(&self, _key: &str, _value: &[u8]) -> Result<(), StudyError> {
            Err(StudyError::Serialization("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemePreference::load(Box::new(MemoryStore::new()));
        assert!(!theme.is_dark());
        assert_eq!(theme.root_class(), "");
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut theme = ThemePreference::load(Box::new(MemoryStore::new()));
        assert!(theme.toggle());
        assert_eq!(theme.root_class(), "dark");
        assert!(!theme.toggle());
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_toggle_persists_json() {
        let store = MemoryStore::new();
        let mut theme = ThemePreference::load(Box::new(store.clone()));
        theme.toggle();

        assert_eq!(store.load_preference(DARK_MODE_KEY).unwrap().unwrap(), b"true");
    }

    #[test]
    fn test_survives_simulated_reload() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");

        {
            let mut theme = ThemePreference::load(Box::new(Storage::new(&db_path).unwrap()));
            theme.toggle();
        }

        let theme = ThemePreference::load(Box::new(Storage::new(&db_path).unwrap()));
        assert!(theme.is_dark());
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut theme = ThemePreference::load(Box::new(BrokenStore));
        assert!(!theme.is_dark());
        assert!(theme.toggle());
        assert!(theme.is_dark());
    }

    #[test]
    fn test_garbage_value_reads_as_default() {
        let store = MemoryStore::new();
        store.save_preference(DARK_MODE_KEY, b"{not json").unwrap();
        let theme = ThemePreference::load(Box::new(store));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_truthy_values() {
        let store = MemoryStore::new();
        store.save_preference(DARK_MODE_KEY, b"1").unwrap();
        assert!(ThemePreference::load(Box::new(store.clone())).is_dark());

        store.save_preference(DARK_MODE_KEY, b"null").unwrap();
        assert!(!ThemePreference::load(Box::new(store)).is_dark());
    }
}
