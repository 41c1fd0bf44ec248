//! Content presenter: the five display modes of an item.
//!
//! Every view is built from a resolved [`ContentItem`] and owns its data, so
//! holding a view never borrows from or mutates the dataset.

use std::fmt;
use std::str::FromStr;

use crate::error::StudyError;
use crate::types::{ContentItem, Dataset, Flashcard, Section};

/// Placeholder shown when an item has no summary
pub const SUMMARY_PLACEHOLDER: &str = "Summary coming soon.";

/// Maximum number of key points shown in the mind map
pub const MIND_MAP_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Summary,
    KeyPoints,
    Mcq,
    Flashcards,
    MindMap,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 5] = [
        DisplayMode::Summary,
        DisplayMode::KeyPoints,
        DisplayMode::Mcq,
        DisplayMode::Flashcards,
        DisplayMode::MindMap,
    ];

    /// Identifier used by tool buttons and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Summary => "summary",
            DisplayMode::KeyPoints => "keypoints",
            DisplayMode::Mcq => "mcq",
            DisplayMode::Flashcards => "flashcards",
            DisplayMode::MindMap => "mindmap",
        }
    }

    /// Tool button label
    pub fn button_label(&self) -> &'static str {
        match self {
            DisplayMode::Summary => "\u{1F4DD} Summary",
            DisplayMode::KeyPoints => "\u{1F3AF} Key Points",
            DisplayMode::Mcq => "\u{2753} MCQ",
            DisplayMode::Flashcards => "\u{1F0CF} Flashcards",
            DisplayMode::MindMap => "\u{1F9E0} Mind Map",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        DisplayMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| StudyError::UnknownMode(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub title: String,
    pub author: Option<String>,
    pub summary: String,
}

impl SummaryView {
    /// `By: {author}` when the item names an author
    pub fn byline(&self) -> Option<String> {
        self.author.as_ref().map(|author| format!("By: {}", author))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPointsView {
    pub title: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// `Q{n}: {question}`
    pub label: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub title: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardsView {
    pub title: String,
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindMapView {
    pub title: String,
    pub concepts: Vec<String>,
}

impl MindMapView {
    /// `Key concepts: a, b, c`
    pub fn text(&self) -> String {
        format!("Key concepts: {}", self.concepts.join(", "))
    }
}

/// One rendered display mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Summary(SummaryView),
    KeyPoints(KeyPointsView),
    Quiz(QuizView),
    Flashcards(FlashcardsView),
    MindMap(MindMapView),
}

impl ContentView {
    pub fn mode(&self) -> DisplayMode {
        match self {
            ContentView::Summary(_) => DisplayMode::Summary,
            ContentView::KeyPoints(_) => DisplayMode::KeyPoints,
            ContentView::Quiz(_) => DisplayMode::Mcq,
            ContentView::Flashcards(_) => DisplayMode::Flashcards,
            ContentView::MindMap(_) => DisplayMode::MindMap,
        }
    }

    /// Modal heading for the view
    pub fn heading(&self) -> String {
        match self {
            ContentView::Summary(v) => v.title.clone(),
            ContentView::KeyPoints(v) => format!("{} - Key Points", v.title),
            ContentView::Quiz(v) => format!("{} - Practice Quiz", v.title),
            ContentView::Flashcards(v) => format!("{} - Flashcards", v.title),
            ContentView::MindMap(v) => format!("{} - Mind Map", v.title),
        }
    }
}

/// Build the view for `mode` from a resolved item.
pub fn present(item: &ContentItem, mode: DisplayMode) -> ContentView {
    let title = item.title.clone();
    match mode {
        DisplayMode::Summary => ContentView::Summary(SummaryView {
            title,
            author: item.author.clone().filter(|a| !a.is_empty()),
            summary: item
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string()),
        }),
        DisplayMode::KeyPoints => ContentView::KeyPoints(KeyPointsView {
            title,
            points: item.key_points.clone(),
        }),
        DisplayMode::Mcq => ContentView::Quiz(QuizView {
            title,
            questions: item
                .mcqs
                .iter()
                .enumerate()
                .map(|(i, mcq)| QuestionView {
                    label: format!("Q{}: {}", i + 1, mcq.question),
                    options: mcq.options.to_vec(),
                })
                .collect(),
        }),
        DisplayMode::Flashcards => ContentView::Flashcards(FlashcardsView {
            title,
            cards: item.flashcards.clone(),
        }),
        DisplayMode::MindMap => ContentView::MindMap(MindMapView {
            title,
            concepts: item
                .key_points
                .iter()
                .take(MIND_MAP_LIMIT)
                .cloned()
                .collect(),
        }),
    }
}

/// Resolve `(section, index)` and build its view; `None` when the item does not exist.
pub fn present_at(
    dataset: &Dataset,
    section: Section,
    index: usize,
    mode: DisplayMode,
) -> Option<ContentView> {
    dataset.item(section, index).map(|item| present(item, mode))
}

/// Plain-text rendering, used by the CLI
impl fmt::Display for ContentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        match self {
            ContentView::Summary(v) => {
                if let Some(byline) = v.byline() {
                    writeln!(f, "{}", byline)?;
                }
                writeln!(f)?;
                writeln!(f, "{}", v.summary)
            }
            ContentView::KeyPoints(v) => {
                for point in &v.points {
                    writeln!(f, "  - {}", point)?;
                }
                Ok(())
            }
            ContentView::Quiz(v) => {
                for question in &v.questions {
                    writeln!(f)?;
                    writeln!(f, "{}", question.label)?;
                    for (i, option) in question.options.iter().enumerate() {
                        writeln!(f, "  [{}] {}", i, option)?;
                    }
                }
                Ok(())
            }
            ContentView::Flashcards(v) => {
                for (i, card) in v.cards.iter().enumerate() {
                    writeln!(f, "  {:>2}. {} | {}", i + 1, card.front, card.back)?;
                }
                Ok(())
            }
            ContentView::MindMap(v) => writeln!(f, "{}", v.text()),
        }
    }
}
