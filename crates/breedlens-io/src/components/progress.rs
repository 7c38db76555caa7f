//! Upload progress bar.

use dioxus::prelude::*;

/// Props for the [`ProgressBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// Completion percentage, `0..=100`.
    ///
    /// The Fetch API exposes no upload progress, so the submission flow
    /// drives this with coarse milestones (0 on send, 100 on response)
    /// rather than a byte count.
    percent: u8,
}

/// A horizontal progress bar with a percentage label.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent.min(100);

    rsx! {
        div { class: "progress",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuenow": "{percent}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div {
                    class: "progress-fill",
                    style: "width: {percent}%",
                }
            }
            span { class: "progress-label", "{percent}%" }
        }
    }
}
