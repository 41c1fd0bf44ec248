//! Flashcard deck state.
//!
//! A card is identified by its index in the item's flashcard list. The deck
//! tracks a per-card `flipped` flag and a separate display order, so
//! shuffling moves cards without touching their faces.

use rand::Rng;
use tracing::debug;

use crate::types::Flashcard;

/// Which face of a card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Flip and ordering state for one item's flashcards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlashcardDeck {
    flipped: Vec<bool>,
    order: Vec<usize>,
}

impl FlashcardDeck {
    /// Deck with every card front-up, in authored order
    pub fn new(cards: &[Flashcard]) -> Self {
        Self::with_len(cards.len())
    }

    pub fn with_len(len: usize) -> Self {
        Self {
            flipped: vec![false; len],
            order: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flipped.is_empty()
    }

    /// Card ids in display order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_flipped(&self, card: usize) -> bool {
        self.flipped.get(card).copied().unwrap_or(false)
    }

    pub fn face(&self, card: usize) -> Face {
        if self.is_flipped(card) {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Card-clicked callback: toggle one card. Unknown ids are ignored.
    pub fn click(&mut self, card: usize) -> bool {
        match self.flipped.get_mut(card) {
            Some(flipped) => {
                *flipped = !*flipped;
                debug!(card, flipped = *flipped, "flashcard toggled");
                true
            }
            None => false,
        }
    }

    /// Flip-all callback: toggle every card (not a force-set).
    pub fn flip_all(&mut self) {
        for flipped in &mut self.flipped {
            *flipped = !*flipped;
        }
        debug!(cards = self.flipped.len(), "flashcards flipped");
    }

    /// Shuffle callback: Fisher-Yates over the current display order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.order.len()).rev() {
            let j = rng.random_range(0..=i);
            self.order.swap(i, j);
        }
        debug!(order = ?self.order, "flashcards shuffled");
    }

    /// `(card id, flipped)` pairs in display order
    pub fn visible(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.order.iter().map(|&card| (card, self.is_flipped(card)))
    }
}
