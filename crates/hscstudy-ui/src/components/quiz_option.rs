//! Quiz Option Component
//!
//! One selectable answer in a quiz question. After the group is answered the
//! selected option and the correct option are marked.

use dioxus::prelude::*;
use hscstudy_core::OptionMark;

/// CSS class for an option with the given mark
pub fn option_class(mark: Option<OptionMark>) -> String {
    match mark {
        Some(mark) => format!("mcq-option {}", mark.class()),
        None => "mcq-option".to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct QuizOptionProps {
    pub text: String,
    #[props(default)]
    pub mark: Option<OptionMark>,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn QuizOption(props: QuizOptionProps) -> Element {
    let class = option_class(props.mark);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            "{props.text}"
        }
    }
}
