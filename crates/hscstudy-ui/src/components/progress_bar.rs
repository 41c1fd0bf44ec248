//! Progress Bar Component
//!
//! Renders the home page progress indicator.

use dioxus::prelude::*;
use hscstudy_core::Progress;

/// Inline style for the fill element
pub fn fill_style(progress: Progress) -> String {
    format!("width: {}", progress.width())
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    pub progress: Progress,
}

/// Displays a filled bar plus its "N% Complete" label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProgressBar { progress: app.read().progress() }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let style = fill_style(props.progress);
    let label = props.progress.label();
    let percent = props.progress.percent();

    rsx! {
        div { class: "progress",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
                div { class: "progress-fill", style: "{style}" }
            }
            span { class: "progress-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_style_uses_percent() {
        assert_eq!(fill_style(Progress::current()), "width: 55%");
    }
}
