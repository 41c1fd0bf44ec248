//! Core types for HSC Study

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudyError;

/// One of the four fixed content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Prose,
    Poetry,
    Writing,
    Novel,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 4] = [
        Section::Prose,
        Section::Poetry,
        Section::Writing,
        Section::Novel,
    ];

    /// Wire name, as used for dataset keys
    pub fn name(&self) -> &'static str {
        match self {
            Section::Prose => "prose",
            Section::Poetry => "poetry",
            Section::Writing => "writing",
            Section::Novel => "novel",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Prose => "Prose",
            Section::Poetry => "Poetry",
            Section::Writing => "Writing",
            Section::Novel => "Novel",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| StudyError::UnknownSection(s.to_string()))
    }
}

/// Multiple-choice question with exactly four options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question: String,
    pub options: [String; 4],
    /// Index of the correct option, expected in `0..4`
    pub correct: usize,
}

/// Two-faced study card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// A chapter, poem or text within a section
///
/// Every field tolerates missing, null or mistyped input: collections fall
/// back to empty and malformed entries are dropped, so one bad entry never
/// costs its siblings. Enrichment fills the quiz and flashcard lists afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub key_points: Vec<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub mcqs: Vec<McqQuestion>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub flashcards: Vec<Flashcard>,
}

impl ContentItem {
    /// Create an item with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Study content keyed by section
///
/// A section that is `None` was absent (or null, or not a list) in the source
/// data and stays absent; unknown keys in the source JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub prose: Option<Vec<ContentItem>>,
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub poetry: Option<Vec<ContentItem>>,
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub writing: Option<Vec<ContentItem>>,
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub novel: Option<Vec<ContentItem>>,
}

impl Dataset {
    /// Dataset used when the host supplies none: all four sections, each empty
    pub fn empty_sections() -> Self {
        Self {
            prose: Some(Vec::new()),
            poetry: Some(Vec::new()),
            writing: Some(Vec::new()),
            novel: Some(Vec::new()),
        }
    }

    /// Items of a section, or `None` if the section is absent
    pub fn section(&self, section: Section) -> Option<&[ContentItem]> {
        match section {
            Section::Prose => self.prose.as_deref(),
            Section::Poetry => self.poetry.as_deref(),
            Section::Writing => self.writing.as_deref(),
            Section::Novel => self.novel.as_deref(),
        }
    }

    pub fn section_mut(&mut self, section: Section) -> Option<&mut Vec<ContentItem>> {
        match section {
            Section::Prose => self.prose.as_mut(),
            Section::Poetry => self.poetry.as_mut(),
            Section::Writing => self.writing.as_mut(),
            Section::Novel => self.novel.as_mut(),
        }
    }

    /// Replace (or create) a section's items
    pub fn set_section(&mut self, section: Section, items: Vec<ContentItem>) {
        let slot = match section {
            Section::Prose => &mut self.prose,
            Section::Poetry => &mut self.poetry,
            Section::Writing => &mut self.writing,
            Section::Novel => &mut self.novel,
        };
        *slot = Some(items);
    }

    /// Resolve a single item; out-of-range lookups yield `None`
    pub fn item(&self, section: Section, index: usize) -> Option<&ContentItem> {
        self.section(section).and_then(|items| items.get(index))
    }

    /// Present sections paired with their items, in display order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[ContentItem])> + '_ {
        Section::ALL
            .into_iter()
            .filter_map(move |section| self.section(section).map(|items| (section, items)))
    }

    /// Total number of items across all present sections
    pub fn item_count(&self) -> usize {
        self.sections().map(|(_, items)| items.len()).sum()
    }

    /// Parse a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, StudyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, StudyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Forgiving deserializers for hand-written dataset files.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    /// Array entries that parse as `T`; anything else is dropped.
    fn parse_entries<T: DeserializeOwned>(entries: Vec<Value>) -> Vec<T> {
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(index, "dropping malformed dataset entry: {}", e);
                    None
                }
            })
            .collect()
    }

    /// A list field: null or a non-list reads as empty.
    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(entries) => parse_entries(entries),
            Value::Null => Vec::new(),
            other => {
                warn!("expected a list, found {}; using empty", other);
                Vec::new()
            }
        })
    }

    /// A section: null or a non-list reads as absent.
    pub fn section<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(entries) => Some(parse_entries(entries)),
            Value::Null => None,
            other => {
                warn!("expected a list of items, found {}; section skipped", other);
                None
            }
        })
    }

    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_string(deserializer)?.unwrap_or_default())
    }
}
