//! Chapter Card Component
//!
//! One content item in a section grid, with a tool button per display mode.

use dioxus::prelude::*;
use hscstudy_core::{ChapterCard as CardData, DisplayMode};
use hscstudy_ui::{Button, ButtonVariant};

use crate::context::use_study;

#[derive(Props, Clone, PartialEq)]
pub struct ChapterCardProps {
    pub card: CardData,
}

#[component]
pub fn ChapterCard(props: ChapterCardProps) -> Element {
    let mut study = use_study();
    let card = props.card;
    let (section, index) = (card.section, card.index);
    let summary = card.summary.clone().unwrap_or_default();

    rsx! {
        article { class: "chapter-card",
            h3 { class: "chapter-title", "{card.title}" }
            if let Some(author) = card.author_label() {
                p { class: "chapter-author", "{author}" }
            }
            p { class: "chapter-summary", "{summary}" }
            div { class: "study-tools",
                for mode in DisplayMode::ALL {
                    Button {
                        variant: ButtonVariant::Tool,
                        onclick: move |_| {
                            study.write().open(section, index, mode);
                        },
                        "{mode.button_label()}"
                    }
                }
            }
        }
    }
}
