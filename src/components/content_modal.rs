//! Content Modal Component
//!
//! Shows the open display mode over the page. Clicking the overlay or the
//! close button dismisses it; clicks inside the dialog do not.

use dioxus::prelude::*;
use hscstudy_core::ContentView;
use hscstudy_ui::CloseButton;

use crate::components::content_views::{
    FlashcardsPanel, KeyPointsPanel, MindMapPanel, QuizPanel, SummaryPanel,
};
use crate::context::use_study;

#[component]
pub fn ContentModal() -> Element {
    let mut study = use_study();

    let Some(view) = study.read().modal().map(|m| m.view.clone()) else {
        return rsx! {};
    };
    let heading = view.heading();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| study.write().close_modal(),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{heading}",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{heading}" }
                    CloseButton { onclick: move |_| study.write().close_modal() }
                }
                div { class: "modal-content",
                    match view {
                        ContentView::Summary(v) => rsx! { SummaryPanel { view: v } },
                        ContentView::KeyPoints(v) => rsx! { KeyPointsPanel { view: v } },
                        ContentView::Quiz(v) => rsx! { QuizPanel { view: v } },
                        ContentView::Flashcards(v) => rsx! { FlashcardsPanel { view: v } },
                        ContentView::MindMap(v) => rsx! { MindMapPanel { view: v } },
                    }
                }
            }
        }
    }
}
