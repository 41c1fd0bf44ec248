//! Section navigation and chapter-card loading.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::StudyError;
use crate::types::{ContentItem, Dataset, Section};

/// A navigable tab: the landing page or one of the sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavTarget {
    #[default]
    Home,
    Section(Section),
}

impl NavTarget {
    /// Tabs in display order
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::Section(Section::Prose),
        NavTarget::Section(Section::Poetry),
        NavTarget::Section(Section::Writing),
        NavTarget::Section(Section::Novel),
    ];

    pub fn id(&self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::Section(section) => section.name(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Section(section) => section.label(),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            NavTarget::Home => None,
            NavTarget::Section(section) => Some(*section),
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NavTarget {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("home") {
            Ok(NavTarget::Home)
        } else {
            s.parse().map(NavTarget::Section)
        }
    }
}

/// Tab state as shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub target: NavTarget,
    pub active: bool,
}

impl Tab {
    /// Value for the `aria-selected` attribute
    pub fn aria_selected(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// Summary card for one item in a section grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterCard {
    pub section: Section,
    pub index: usize,
    pub title: String,
    pub author: Option<String>,
    pub summary: Option<String>,
}

impl ChapterCard {
    pub fn new(section: Section, index: usize, item: &ContentItem) -> Self {
        Self {
            section,
            index,
            title: item.title.clone(),
            author: item.author.clone().filter(|a| !a.is_empty()),
            summary: item.summary.clone(),
        }
    }

    /// `Author: {author}` line shown on the card
    pub fn author_label(&self) -> Option<String> {
        self.author.as_ref().map(|author| format!("Author: {}", author))
    }
}

/// Build the card grid for a section; an absent section has no cards.
pub fn load_section_cards(dataset: &Dataset, section: Section) -> Vec<ChapterCard> {
    dataset
        .section(section)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| ChapterCard::new(section, index, item))
                .collect()
        })
        .unwrap_or_default()
}

/// Tracks which tab is active; exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    active: NavTarget,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> NavTarget {
        self.active
    }

    pub fn select(&mut self, target: NavTarget) {
        debug!(%target, "section selected");
        self.active = target;
    }

    pub fn tabs(&self) -> [Tab; 5] {
        NavTarget::ALL.map(|target| Tab {
            target,
            active: target == self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_active_initially() {
        let nav = Navigator::new();
        assert_eq!(nav.active(), NavTarget::Home);
        let tabs = nav.tabs();
        assert!(tabs[0].active);
        assert_eq!(tabs[0].aria_selected(), "true");
        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
    }

    #[test]
    fn test_select_moves_single_active_tab() {
        let mut nav = Navigator::new();
        nav.select(NavTarget::Section(Section::Writing));

        let active: Vec<_> = nav.tabs().iter().filter(|t| t.active).map(|t| t.target).collect();
        assert_eq!(active, vec![NavTarget::Section(Section::Writing)]);
    }

    #[test]
    fn test_nav_target_parse() {
        assert_eq!("HOME".parse::<NavTarget>().unwrap(), NavTarget::Home);
        assert_eq!(
            "novel".parse::<NavTarget>().unwrap(),
            NavTarget::Section(Section::Novel)
        );
        assert!("drama".parse::<NavTarget>().is_err());
    }

    #[test]
    fn test_load_section_cards() {
        let mut dataset = Dataset::default();
        let mut item = ContentItem::new("The Crucible");
        item.author = Some(String::new());
        dataset.set_section(Section::Novel, vec![ContentItem::new("1984"), item]);

        let cards = load_section_cards(&dataset, Section::Novel);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[1].title, "The Crucible");
        assert!(cards[1].author.is_none());
        assert!(cards[1].author_label().is_none());

        assert!(load_section_cards(&dataset, Section::Prose).is_empty());
    }

    #[test]
    fn test_card_author_label() {
        let mut item = ContentItem::new("Frankenstein");
        item.author = Some("Mary Shelley".to_string());
        let card = ChapterCard::new(Section::Novel, 0, &item);
        assert_eq!(card.author_label().as_deref(), Some("Author: Mary Shelley"));
    }
}
