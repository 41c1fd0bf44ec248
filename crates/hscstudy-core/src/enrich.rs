//! Dataset enrichment.
//!
//! Guarantees every item in the four tracked sections carries at least
//! [`MIN_MCQS`] quiz questions and [`MIN_FLASHCARDS`] flashcards. Missing
//! entries are synthesized from the item title and their position, so the
//! result depends only on the input content.
//!
//! Existing entries are never removed, reordered or truncated.

use tracing::{debug, info};

use crate::types::{ContentItem, Dataset, Flashcard, McqQuestion, Section};

/// Minimum quiz questions per item after enrichment
pub const MIN_MCQS: usize = 12;

/// Minimum flashcards per item after enrichment
pub const MIN_FLASHCARDS: usize = 16;

/// Options offered by every synthetic question
pub const SYNTHETIC_OPTIONS: [&str; 4] = ["True", "False", "Not given", "Depends"];

/// Return an enriched copy of `raw`; the input is left untouched.
pub fn enrich(raw: &Dataset) -> Dataset {
    let mut enriched = raw.clone();
    let mut synthesized = 0usize;

    for section in Section::ALL {
        let Some(items) = enriched.section_mut(section) else {
            continue;
        };
        for (index, item) in items.iter_mut().enumerate() {
            let added = enrich_item(item);
            if added > 0 {
                debug!(%section, index, title = %item.title, added, "padded item");
            }
            synthesized += added;
        }
    }

    info!(
        items = enriched.item_count(),
        synthesized, "dataset enriched"
    );
    enriched
}

/// Pad one item in place, returning the number of synthetic entries added.
fn enrich_item(item: &mut ContentItem) -> usize {
    let mcqs_before = item.mcqs.len();
    let cards_before = item.flashcards.len();

    pad(&mut item.mcqs, MIN_MCQS, |i| synthetic_mcq(&item.title, i));
    pad(&mut item.flashcards, MIN_FLASHCARDS, |i| {
        synthetic_flashcard(&item.title, i)
    });

    (item.mcqs.len() - mcqs_before) + (item.flashcards.len() - cards_before)
}

fn pad<T>(entries: &mut Vec<T>, target: usize, mut build: impl FnMut(usize) -> T) {
    while entries.len() < target {
        let position = entries.len();
        entries.push(build(position));
    }
}

/// Synthetic question at zero-based `position`; the correct option cycles with it.
pub fn synthetic_mcq(title: &str, position: usize) -> McqQuestion {
    McqQuestion {
        question: format!("Concept check {} for {}?", position + 1, title),
        options: SYNTHETIC_OPTIONS.map(String::from),
        correct: position % 4,
    }
}

/// Synthetic flashcard at zero-based `position`.
pub fn synthetic_flashcard(title: &str, position: usize) -> Flashcard {
    Flashcard {
        front: format!("{}: Key idea {}", title, position + 1),
        back: format!("Explanation for key idea {} in {}.", position + 1, title),
    }
}
