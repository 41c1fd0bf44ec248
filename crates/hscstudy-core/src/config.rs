//! Application configuration: where data lives and where content comes from.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::StudyResult;
use crate::storage::DB_FILE_NAME;
use crate::types::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the preference database
    pub data_dir: PathBuf,
    /// JSON dataset to load; `None` uses the empty default dataset
    pub dataset_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            dataset_path: None,
        }
    }
}

impl AppConfig {
    pub fn new(data_dir: Option<PathBuf>, dataset_path: Option<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            dataset_path,
        }
    }

    /// Path of the redb preference database
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    /// Load the configured dataset (not yet enriched).
    pub fn load_dataset(&self) -> StudyResult<Dataset> {
        match &self.dataset_path {
            Some(path) => load_dataset_file(path),
            None => Ok(Dataset::empty_sections()),
        }
    }
}

/// Default data directory (~/.hscstudy/data)
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hscstudy")
        .join("data")
}

/// Read a JSON dataset. A missing file falls back to the empty default and
/// malformed items inside it degrade to empty content; a file that is not a
/// JSON object is an error.
pub fn load_dataset_file(path: &Path) -> StudyResult<Dataset> {
    if !path.exists() {
        warn!(path = %path.display(), "dataset file not found, using empty dataset");
        return Ok(Dataset::empty_sections());
    }
    let json = std::fs::read_to_string(path)?;
    let dataset = Dataset::from_json(&json)?;
    info!(path = %path.display(), items = dataset.item_count(), "dataset loaded");
    Ok(dataset)
}
