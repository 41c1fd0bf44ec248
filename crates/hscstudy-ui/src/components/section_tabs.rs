//! Section Tabs Component
//!
//! The header tab strip: Home plus one tab per content section.
//! Exactly one tab is active and carries `aria-selected="true"`.

use dioxus::prelude::*;
use hscstudy_core::{NavTarget, Tab};

/// CSS class for a tab in the given state
pub fn tab_class(active: bool) -> &'static str {
    if active {
        "nav-tab active"
    } else {
        "nav-tab"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionTabsProps {
    /// Tabs in display order, as produced by the navigator
    pub tabs: Vec<Tab>,
    /// Called with the tab's target when clicked
    pub on_select: EventHandler<NavTarget>,
}

/// Displays the row of navigation tabs
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionTabs {
///         tabs: app.read().tabs().to_vec(),
///         on_select: move |target| { app.write().show(target); }
///     }
/// }
/// ```
#[component]
pub fn SectionTabs(props: SectionTabsProps) -> Element {
    rsx! {
        nav {
            class: "nav-tabs",
            role: "tablist",
            "aria-label": "Sections",
            for tab in props.tabs.iter().copied() {
                {
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: tab_class(tab.active),
                            role: "tab",
                            "aria-selected": tab.aria_selected(),
                            "aria-controls": "{tab.target.id()}",
                            onclick: move |_| on_select.call(tab.target),
                            "{tab.target.label()}"
                        }
                    }
                }
            }
        }
    }
}
