use dioxus::prelude::*;
use hscstudy_core::{NavTarget, StudyApp};

use crate::components::{ContentModal, NavHeader};
use crate::context::{get_config, init_study};
use crate::pages::{HomePage, SectionPage};
use crate::theme::{palette_styles, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles and the study state, and switches between the
/// home page and the active section.
#[component]
pub fn App() -> Element {
    let study: Signal<StudyApp> = use_signal(|| init_study(&get_config()));
    use_context_provider(|| study);

    let root_class = match study.read().root_class() {
        "" => "app".to_string(),
        dark => format!("app {}", dark),
    };
    let active = study.read().active();
    let modal_open = study.read().modal().is_some();

    rsx! {
        style { {palette_styles()} }
        style { {GLOBAL_STYLES} }
        div { class: "{root_class}",
            NavHeader {}
            main { class: "content",
                match active {
                    NavTarget::Home => rsx! { HomePage {} },
                    NavTarget::Section(section) => rsx! { SectionPage { section } },
                }
            }
            if modal_open {
                ContentModal {}
            }
        }
    }
}
