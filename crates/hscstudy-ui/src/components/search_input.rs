//! Search Input Component
//!
//! Filters the chapter cards of every section as the user types.

use dioxus::prelude::*;

pub const SEARCH_PLACEHOLDER: &str = "Search titles and summaries...";

#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default = SEARCH_PLACEHOLDER.to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                id: "searchInput",
                class: "input-field search-input",
                r#type: "search",
                "aria-label": "Search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
