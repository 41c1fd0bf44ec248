//! Display-mode panels rendered inside the content modal.

use dioxus::prelude::*;
use hscstudy_core::presenter::{FlashcardsView, KeyPointsView, MindMapView, QuizView, SummaryView};
use hscstudy_ui::{Button, ButtonVariant, FlashcardTile, QuizOption};

use crate::context::use_study;

#[component]
pub fn SummaryPanel(view: SummaryView) -> Element {
    rsx! {
        div { class: "summary",
            if let Some(byline) = view.byline() {
                h3 { class: "chapter-author", "{byline}" }
            }
            p { "{view.summary}" }
        }
    }
}

#[component]
pub fn KeyPointsPanel(view: KeyPointsView) -> Element {
    rsx! {
        div { class: "key-points",
            ul {
                for point in view.points.iter() {
                    li { "{point}" }
                }
            }
        }
    }
}

/// Quiz questions with per-group marking and a score button
#[component]
pub fn QuizPanel(view: QuizView) -> Element {
    let mut study = use_study();

    let (marks, score) = {
        let app = study.read();
        let modal = app.modal();
        let marks: Vec<_> = modal
            .and_then(|m| m.quiz())
            .map(|quiz| quiz.groups().iter().map(|g| g.marks()).collect())
            .unwrap_or_default();
        (marks, modal.and_then(|m| m.last_score))
    };

    rsx! {
        for (group, question) in view.questions.iter().enumerate() {
            div { class: "mcq-container",
                div { class: "mcq-question", "{question.label}" }
                div { class: "mcq-options",
                    for (option, text) in question.options.iter().enumerate() {
                        QuizOption {
                            text: text.clone(),
                            mark: marks.get(group).and_then(|m| m.get(option).copied().flatten()),
                            onclick: move |_| {
                                study.write().select_option(group, option);
                            },
                        }
                    }
                }
            }
        }
        div { class: "key-points quiz-actions",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    study.write().score_quiz();
                },
                "Check Score"
            }
            span { class: "quiz-score",
                if let Some(score) = score {
                    "Score: {score}"
                }
            }
        }
    }
}

/// Flashcard grid in display order with Shuffle and Flip All
#[component]
pub fn FlashcardsPanel(view: FlashcardsView) -> Element {
    let mut study = use_study();

    let visible: Vec<(usize, bool)> = study
        .read()
        .modal()
        .and_then(|m| m.deck())
        .map(|deck| deck.visible().collect())
        .unwrap_or_default();

    rsx! {
        div { class: "flash-toolbar",
            Button {
                onclick: move |_| {
                    study.write().shuffle_cards(&mut rand::rng());
                },
                "Shuffle"
            }
            Button {
                onclick: move |_| {
                    study.write().flip_all();
                },
                "Flip All"
            }
        }
        div { class: "chapter-grid flash-grid",
            for (card, flipped) in visible {
                if let Some(content) = view.cards.get(card) {
                    FlashcardTile {
                        front: content.front.clone(),
                        back: content.back.clone(),
                        flipped,
                        onclick: move |_| {
                            study.write().click_card(card);
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn MindMapPanel(view: MindMapView) -> Element {
    let text = view.text();

    rsx! {
        div { class: "mindmap",
            p { "{text}" }
        }
    }
}
