//! Section page - grid of chapter cards filtered by the search query.

use dioxus::prelude::*;
use hscstudy_core::{ChapterCard as CardData, Section};

use crate::components::ChapterCard;
use crate::context::use_study;

#[component]
pub fn SectionPage(section: Section) -> Element {
    let study = use_study();

    let (cards, total, query): (Vec<CardData>, usize, String) = {
        let app = study.read();
        (
            app.visible_cards(section).into_iter().cloned().collect(),
            app.cards(section).len(),
            app.search_query().trim().to_string(),
        )
    };

    rsx! {
        section { id: "{section.name()}", class: "section-page",
            h2 { class: "section-header", "{section.label()}" }
            if total == 0 {
                p { class: "empty-state", "No texts in this section yet." }
            } else if cards.is_empty() {
                p { class: "empty-state", "No texts match \u{201C}{query}\u{201D}." }
            }
            div { class: "chapter-grid",
                for card in cards {
                    ChapterCard { card }
                }
            }
        }
    }
}
