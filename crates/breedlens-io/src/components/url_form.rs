//! Remote image URL form.

use dioxus::prelude::*;

/// Props for the [`UrlForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UrlFormProps {
    /// Called with the raw input text when the user submits. Trimming
    /// and emptiness checks happen in the app's submission flow so a
    /// rejection lands in the shared error panel.
    on_submit: EventHandler<String>,
    /// Disables the submit button while a request is in flight.
    busy: bool,
}

/// A single-line URL input with a submit button.
///
/// Submits on button click or Enter. The input is not cleared after
/// submission so the user can tweak and resubmit.
#[component]
pub fn UrlForm(props: UrlFormProps) -> Element {
    let mut url = use_signal(String::new);

    let submit = move |_| {
        props.on_submit.call(url());
    };

    rsx! {
        div { class: "url-form",
            input {
                r#type: "url",
                class: "url-input",
                placeholder: "https://example.com/dog.jpg",
                aria_label: "Image URL",
                value: "{url}",
                oninput: move |evt| url.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        props.on_submit.call(url());
                    }
                },
            }
            button {
                class: "btn btn-primary",
                disabled: props.busy,
                onclick: submit,
                "Detect"
            }
        }
    }
}
