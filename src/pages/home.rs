//! Home page - landing tab with progress and section shortcuts.

use dioxus::prelude::*;
use hscstudy_core::{NavTarget, Section};
use hscstudy_ui::{Button, ButtonVariant, ProgressBar};

use crate::context::use_study;

/// `1 text` / `{n} texts`
pub fn text_count(count: usize) -> String {
    if count == 1 {
        "1 text".to_string()
    } else {
        format!("{} texts", count)
    }
}

#[component]
pub fn HomePage() -> Element {
    let mut study = use_study();
    let progress = study.read().progress();
    let counts: Vec<(Section, usize)> = Section::ALL
        .into_iter()
        .map(|section| (section, study.read().cards(section).len()))
        .collect();

    rsx! {
        section { id: "home", class: "home",
            header { class: "hero",
                h2 { class: "page-title", "HSC English Study Hub" }
                p { class: "tagline",
                    "Summaries, key points, practice quizzes and flashcards for every text."
                }
            }

            div { class: "progress-card",
                h3 { "Your Progress" }
                ProgressBar { progress }
            }

            div { class: "section-overview",
                for (section, count) in counts {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "overview-tile".to_string(),
                        onclick: move |_| {
                            study.write().show(NavTarget::Section(section));
                        },
                        h3 { "{section.label()}" }
                        span { class: "overview-count",
                            "{text_count(count)}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_tiles_use_ghost_buttons() {
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(text_count(1), "1 text");
        assert_eq!(text_count(0), "0 texts");
    }
}
