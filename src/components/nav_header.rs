//! Navigation Header Component
//!
//! Title, section tabs, search box and the dark-mode toggle.

use dioxus::prelude::*;
use hscstudy_ui::{Button, ButtonVariant, SearchInput, SectionTabs};

use crate::context::use_study;

/// Icon for the dark-mode toggle in the given state
pub fn theme_icon(dark: bool) -> &'static str {
    if dark {
        "\u{2600}\u{FE0F}"
    } else {
        "\u{1F319}"
    }
}

#[component]
pub fn NavHeader() -> Element {
    let mut study = use_study();

    let tabs = study.read().tabs().to_vec();
    let query = study.read().search_query().to_string();
    let dark = study.read().is_dark();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-brand",
                h1 { class: "app-title", "HSC Study" }
                Button {
                    variant: ButtonVariant::Toggle,
                    aria_label: "Toggle dark mode".to_string(),
                    onclick: move |_| {
                        study.write().toggle_dark();
                    },
                    "{theme_icon(dark)}"
                }
            }
            SectionTabs {
                tabs,
                on_select: move |target| {
                    study.write().show(target);
                }
            }
            SearchInput {
                value: query,
                oninput: move |q: String| study.write().set_search(q),
            }
        }
    }
}
