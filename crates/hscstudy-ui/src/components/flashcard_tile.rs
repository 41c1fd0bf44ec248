//! Flashcard Tile Component
//!
//! A two-sided card. Clicking toggles between front and back.

use dioxus::prelude::*;

/// CSS class for a tile showing the given face
pub fn tile_class(flipped: bool) -> &'static str {
    if flipped {
        "flashcard flipped"
    } else {
        "flashcard"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FlashcardTileProps {
    pub front: String,
    pub back: String,
    /// Whether the back is showing
    #[props(default = false)]
    pub flipped: bool,
    pub onclick: EventHandler<()>,
}

/// Displays one flashcard
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlashcardTile {
///         front: card.front.clone(),
///         back: card.back.clone(),
///         flipped: deck.is_flipped(id),
///         onclick: move |_| { app.write().click_card(id); }
///     }
/// }
/// ```
#[component]
pub fn FlashcardTile(props: FlashcardTileProps) -> Element {
    let flipped = props.flipped;

    rsx! {
        div {
            class: tile_class(flipped),
            role: "button",
            tabindex: "0",
            "aria-pressed": if flipped { "true" } else { "false" },
            onclick: move |_| props.onclick.call(()),
            div { class: "flashcard-inner",
                div { class: "flashcard-front", "{props.front}" }
                div { class: "flashcard-back", "{props.back}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_classes() {
        assert_eq!(tile_class(false), "flashcard");
        assert_eq!(tile_class(true), "flashcard flipped");
    }
}
