//! Detection result / error panel.

use breedlens_detect::Detection;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdX};

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// The detection to display, if the last submission succeeded.
    detection: Option<Detection>,
    /// Preview image source: a Blob URL of the uploaded bytes for file
    /// submissions, or the service's echoed `image_url` for URL
    /// submissions. `None` hides the preview.
    preview_url: Option<String>,
    /// Error message from the last submission. Takes precedence over
    /// `detection` -- a failure is never rendered as a result.
    error: Option<String>,
}

/// Renders the outcome of the most recent submission.
///
/// A failure shows a single red alert with the error message; a
/// success shows the breed, the confidence to two decimal places, and
/// the preview image when one is available. Idle state renders nothing.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    if let Some(ref message) = props.error {
        return rsx! {
            div { class: "alert alert-error", role: "alert",
                Icon { icon: LdX, width: 18, height: 18 }
                span { "{message}" }
            }
        };
    }

    let Some(ref detection) = props.detection else {
        return rsx! {};
    };

    rsx! {
        div { class: "result",
            div { class: "alert alert-success",
                h5 { class: "alert-heading",
                    Icon { icon: LdCheck, width: 18, height: 18 }
                    "Result"
                }
                p {
                    strong { "Breed: " }
                    "{detection.breed}"
                }
                p {
                    strong { "Confidence: " }
                    "{detection.confidence_label()}%"
                }
            }

            if let Some(ref url) = props.preview_url {
                img {
                    src: "{url}",
                    class: "result-image",
                    alt: "Submitted dog photo",
                }
            }
        }
    }
}
