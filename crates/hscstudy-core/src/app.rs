//! Application state for HSC Study.
//!
//! [`StudyApp`] owns everything the presentation layer needs: the enriched
//! dataset, the active tab and its card grids, the search query, the open
//! content modal with its widget state, the theme preference and progress.
//! The UI calls its methods from event handlers and renders from its getters.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, info};

use crate::enrich::enrich;
use crate::flashcards::FlashcardDeck;
use crate::navigation::{load_section_cards, ChapterCard, NavTarget, Navigator, Tab};
use crate::preferences::ThemePreference;
use crate::presenter::{present, ContentView, DisplayMode};
use crate::progress::Progress;
use crate::quiz::{Quiz, Score};
use crate::search::filter_cards;
use crate::storage::PreferenceStore;
use crate::types::{Dataset, Section};

/// Interactive state attached to an open view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Summary, key points and mind map have no interaction
    Static,
    Quiz(Quiz),
    Flashcards(FlashcardDeck),
}

/// The content modal: one view of one item plus its widget state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenContent {
    pub section: Section,
    pub index: usize,
    pub view: ContentView,
    pub widget: Widget,
    /// Result of the last score request, if any
    pub last_score: Option<Score>,
}

impl OpenContent {
    pub fn quiz(&self) -> Option<&Quiz> {
        match &self.widget {
            Widget::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn deck(&self) -> Option<&FlashcardDeck> {
        match &self.widget {
            Widget::Flashcards(deck) => Some(deck),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct StudyApp {
    dataset: Dataset,
    navigator: Navigator,
    cards: BTreeMap<Section, Vec<ChapterCard>>,
    search_query: String,
    modal: Option<OpenContent>,
    theme: ThemePreference,
    progress: Progress,
}

impl StudyApp {
    /// Enrich `raw`, restore the theme from `store` and render every section's cards.
    pub fn init(raw: &Dataset, store: Box<dyn PreferenceStore>) -> Self {
        let dataset = enrich(raw);
        let cards = Section::ALL
            .into_iter()
            .map(|section| (section, load_section_cards(&dataset, section)))
            .collect();

        let app = Self {
            dataset,
            navigator: Navigator::new(),
            cards,
            search_query: String::new(),
            modal: None,
            theme: ThemePreference::load(store),
            progress: Progress::current(),
        };
        info!(
            items = app.dataset.item_count(),
            dark = app.theme.is_dark(),
            "study app initialized"
        );
        app
    }

    /// End the session. Preferences are already persisted on every change.
    pub fn teardown(self) {
        info!(modal_open = self.modal.is_some(), "study app torn down");
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Navigation & Search
    // ═══════════════════════════════════════════════════════════════════════

    pub fn active(&self) -> NavTarget {
        self.navigator.active()
    }

    pub fn tabs(&self) -> [Tab; 5] {
        self.navigator.tabs()
    }

    /// Activate a tab, reloading the section's cards from the dataset.
    pub fn show(&mut self, target: NavTarget) -> &[ChapterCard] {
        self.navigator.select(target);
        match target.section() {
            Some(section) => {
                let cards = load_section_cards(&self.dataset, section);
                debug!(%section, cards = cards.len(), "section cards reloaded");
                self.cards.insert(section, cards);
                self.cards.get(&section).map(Vec::as_slice).unwrap_or_default()
            }
            None => &[],
        }
    }

    /// Rendered cards of a section, unfiltered
    pub fn cards(&self, section: Section) -> &[ChapterCard] {
        self.cards.get(&section).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Cards of a section that match the current search query
    pub fn visible_cards(&self, section: Section) -> Vec<&ChapterCard> {
        filter_cards(self.cards(section), &self.search_query)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Content Modal
    // ═══════════════════════════════════════════════════════════════════════

    /// Open a display mode for an item. Unknown items leave the modal as it was.
    pub fn open(&mut self, section: Section, index: usize, mode: DisplayMode) -> Option<&OpenContent> {
        let item = self.dataset.item(section, index)?;
        let widget = match mode {
            DisplayMode::Mcq => Widget::Quiz(Quiz::new(&item.mcqs)),
            DisplayMode::Flashcards => Widget::Flashcards(FlashcardDeck::new(&item.flashcards)),
            _ => Widget::Static,
        };
        let view = present(item, mode);
        debug!(%section, index, %mode, "content opened");

        self.modal = Some(OpenContent {
            section,
            index,
            view,
            widget,
            last_score: None,
        });
        self.modal.as_ref()
    }

    pub fn modal(&self) -> Option<&OpenContent> {
        self.modal.as_ref()
    }

    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            debug!("content closed");
        }
    }

    fn quiz_mut(&mut self) -> Option<&mut Quiz> {
        match self.modal.as_mut().map(|m| &mut m.widget) {
            Some(Widget::Quiz(quiz)) => Some(quiz),
            _ => None,
        }
    }

    fn deck_mut(&mut self) -> Option<&mut FlashcardDeck> {
        match self.modal.as_mut().map(|m| &mut m.widget) {
            Some(Widget::Flashcards(deck)) => Some(deck),
            _ => None,
        }
    }

    /// Option-selected callback for the open quiz
    pub fn select_option(&mut self, group: usize, option: usize) -> bool {
        self.quiz_mut().is_some_and(|quiz| quiz.select(group, option))
    }

    /// Score-requested callback; the result is also kept on the modal.
    pub fn score_quiz(&mut self) -> Option<Score> {
        let score = self.quiz_mut().map(|quiz| quiz.score())?;
        if let Some(modal) = self.modal.as_mut() {
            modal.last_score = Some(score);
        }
        info!(%score, "quiz scored");
        Some(score)
    }

    /// Card-clicked callback for the open flashcards
    pub fn click_card(&mut self, card: usize) -> bool {
        self.deck_mut().is_some_and(|deck| deck.click(card))
    }

    /// Flip-all-requested callback
    pub fn flip_all(&mut self) -> bool {
        match self.deck_mut() {
            Some(deck) => {
                deck.flip_all();
                true
            }
            None => false,
        }
    }

    /// Shuffle-requested callback
    pub fn shuffle_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match self.deck_mut() {
            Some(deck) => {
                deck.shuffle(rng);
                true
            }
            None => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Theme & Progress
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn root_class(&self) -> &'static str {
        self.theme.root_class()
    }

    /// Toggle dark mode; persisted immediately.
    pub fn toggle_dark(&mut self) -> bool {
        self.theme.toggle()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::ContentItem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::empty_sections();
        let mut ozymandias = ContentItem::new("Ozymandias");
        ozymandias.summary = Some("A sonnet on the decay of power".to_string());
        dataset.set_section(Section::Poetry, vec![ozymandias, ContentItem::new("The Raven")]);
        dataset.set_section(Section::Novel, vec![ContentItem::new("Frankenstein")]);
        dataset
    }

    fn app() -> StudyApp {
        StudyApp::init(&sample_dataset(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_init_enriches_and_renders_cards() {
        let app = app();
        assert_eq!(app.active(), NavTarget::Home);
        assert_eq!(app.dataset().item(Section::Poetry, 1).unwrap().mcqs.len(), 12);
        assert_eq!(app.cards(Section::Poetry).len(), 2);
        assert!(app.cards(Section::Prose).is_empty());
        assert!(app.modal().is_none());
        assert!(app.progress().is_placeholder());
    }

    #[test]
    fn test_show_section_reloads_cards() {
        let mut app = app();
        let cards = app.show(NavTarget::Section(Section::Novel));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Frankenstein");
        assert_eq!(app.active(), NavTarget::Section(Section::Novel));

        assert!(app.show(NavTarget::Home).is_empty());
        assert_eq!(app.tabs().iter().filter(|t| t.active).count(), 1);
    }

    #[test]
    fn test_search_filters_visible_cards() {
        let mut app = app();
        app.set_search("SONNET");
        let visible = app.visible_cards(Section::Poetry);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Ozymandias");

        app.set_search("");
        assert_eq!(app.visible_cards(Section::Poetry).len(), 2);
    }

    #[test]
    fn test_open_missing_item_is_noop() {
        let mut app = app();
        assert!(app.open(Section::Poetry, 0, DisplayMode::Summary).is_some());
        assert!(app.open(Section::Poetry, 9, DisplayMode::Mcq).is_none());
        assert!(app.open(Section::Prose, 0, DisplayMode::Mcq).is_none());

        // Previous modal survives the failed open
        assert_eq!(app.modal().unwrap().view.mode(), DisplayMode::Summary);
    }

    #[test]
    fn test_quiz_flow() {
        let mut app = app();
        app.open(Section::Poetry, 0, DisplayMode::Mcq).unwrap();

        // Synthetic question i has correct index i % 4
        assert!(app.select_option(0, 0));
        assert!(app.select_option(1, 1));
        assert!(app.select_option(2, 0));

        let score = app.score_quiz().unwrap();
        assert_eq!(score.to_string(), "2/12");
        assert_eq!(app.modal().unwrap().last_score, Some(score));
        assert_eq!(app.score_quiz(), Some(score));
    }

    #[test]
    fn test_quiz_callbacks_need_quiz_modal() {
        let mut app = app();
        assert!(!app.select_option(0, 0));
        assert!(app.score_quiz().is_none());

        app.open(Section::Poetry, 0, DisplayMode::Flashcards).unwrap();
        assert!(!app.select_option(0, 0));
        assert!(app.score_quiz().is_none());
    }

    #[test]
    fn test_flashcard_flow() {
        let mut app = app();
        app.open(Section::Novel, 0, DisplayMode::Flashcards).unwrap();

        assert!(app.click_card(2));
        assert!(app.flip_all());
        assert!(app.shuffle_cards(&mut StdRng::seed_from_u64(3)));

        let deck = app.modal().unwrap().deck().unwrap();
        assert_eq!(deck.len(), 16);
        assert!(!deck.is_flipped(2));
        assert!(deck.is_flipped(0));
    }

    #[test]
    fn test_reopening_resets_widget_state() {
        let mut app = app();
        app.open(Section::Novel, 0, DisplayMode::Flashcards).unwrap();
        app.flip_all();
        app.open(Section::Novel, 0, DisplayMode::Flashcards).unwrap();
        assert!(!app.modal().unwrap().deck().unwrap().is_flipped(0));
    }

    #[test]
    fn test_close_modal() {
        let mut app = app();
        app.open(Section::Novel, 0, DisplayMode::MindMap).unwrap();
        app.close_modal();
        assert!(app.modal().is_none());
        assert!(!app.flip_all());
    }

    #[test]
    fn test_dark_mode_roundtrip_through_store() {
        let store = MemoryStore::new();
        let mut app = StudyApp::init(&sample_dataset(), Box::new(store.clone()));
        assert!(app.toggle_dark());
        assert_eq!(app.root_class(), "dark");
        app.teardown();

        let reloaded = StudyApp::init(&sample_dataset(), Box::new(store));
        assert!(reloaded.is_dark());
    }
}
