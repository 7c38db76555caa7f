use breedlens_detect::{DetectConfig, Detection, validate_file, validate_url};
use breedlens_io::analytics::{self, SubmissionSource};
use breedlens_io::client::DetectClient;
use breedlens_io::preview;
use breedlens_io::{ProgressBar, ResultPanel, UploadZone, UrlForm};
use dioxus::prelude::*;

fn main() {
    dioxus::launch(app);
}

/// One submission's payload, captured after client-side validation.
enum Submission {
    /// An uploaded file: original name, raw bytes, sniffed MIME type.
    File {
        name: String,
        bytes: Vec<u8>,
        mime: &'static str,
    },
    /// A remote image URL for the service to download itself.
    Url(String),
}

impl Submission {
    const fn source(&self) -> SubmissionSource {
        match self {
            Self::File { .. } => SubmissionSource::File,
            Self::Url(_) => SubmissionSource::Url,
        }
    }
}

/// Root application component.
///
/// Owns all transient UI state (the current detection, preview, error,
/// and progress) and funnels the three user actions -- click-to-browse,
/// drag-and-drop, and submit-URL -- into one submission flow.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut detection = use_signal(|| Option::<Detection>::None);
    let mut preview_url = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut progress = use_signal(|| Option::<u8>::None);
    let mut generation = use_signal(|| 0u64);

    // Revoke the outstanding preview Blob URL when the app unmounts.
    {
        let preview_url = preview_url;
        use_drop(move || {
            if let Some(ref url) = *preview_url.peek() {
                preview::revoke_blob_url(url);
            }
        });
    }

    // Swap in a new preview source, revoking a replaced Blob URL.
    // Server-provided http(s) URLs need no cleanup.
    let mut set_preview = move |url: Option<String>| {
        if let Some(old) = preview_url.take()
            && old.starts_with("blob:")
        {
            preview::revoke_blob_url(&old);
        }
        preview_url.set(url);
    };

    // Show a validation failure without touching the network.
    let mut show_rejection = move |message: String| {
        set_preview(None);
        detection.set(None);
        error.set(Some(message));
    };

    // --- Submission flow ---
    // Each submission increments the generation; a completing task
    // whose generation is stale discards its outcome silently, so the
    // last submission wins regardless of response order.
    let mut submit = move |submission: Submission| {
        analytics::track_detect(submission.source());

        generation += 1;
        let my_generation = *generation.peek();

        progress.set(Some(0));
        detection.set(None);
        error.set(None);

        spawn(async move {
            let client = DetectClient::default();
            let outcome = match &submission {
                Submission::File { name, bytes, mime } => {
                    client.detect_file(name, bytes, mime).await
                }
                Submission::Url(url) => client.detect_url(url).await,
            };

            // A newer submission superseded this one while we were
            // waiting on the network.
            if *generation.peek() != my_generation {
                return;
            }

            progress.set(Some(100));

            match outcome {
                Ok(result) => {
                    let source_preview = match &submission {
                        Submission::File { bytes, mime, .. } => {
                            preview::image_blob_url(bytes, mime).ok()
                        }
                        Submission::Url(_) => result.image_url.clone(),
                    };
                    set_preview(source_preview);
                    error.set(None);
                    detection.set(Some(result));
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("detect failed: {e}").into());
                    set_preview(None);
                    error.set(Some(e.to_string()));
                }
            }

            // The bar lingers for a second after completion, success or
            // failure, then hides. Cosmetic carry-over from the service's
            // original UI.
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            if *generation.peek() == my_generation {
                progress.set(None);
            }
        });
    };

    // --- File handler (picker and drag-and-drop) ---
    let on_file = move |(bytes, name): (Vec<u8>, String)| {
        match validate_file(&name, &bytes, &DetectConfig::default()) {
            Ok(mime) => submit(Submission::File { name, bytes, mime }),
            Err(e) => show_rejection(e.to_string()),
        }
    };

    // --- URL handler ---
    let on_url = move |raw: String| match validate_url(&raw) {
        Ok(url) => submit(Submission::Url(url.to_owned())),
        Err(e) => show_rejection(e.to_string()),
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/styles.css") }

        div { class: "app-shell",
            header { class: "app-header",
                h1 { "breedlens" }
                p { class: "tagline",
                    "What breed is that dog? Upload a photo to find out."
                }
            }

            main { class: "app-main",
                UploadZone {
                    on_file: on_file,
                }

                p { class: "divider", "or paste an image URL" }

                UrlForm {
                    on_submit: on_url,
                    busy: progress().is_some(),
                }

                if let Some(percent) = progress() {
                    ProgressBar {
                        percent: percent,
                    }
                }

                ResultPanel {
                    detection: detection(),
                    preview_url: preview_url(),
                    error: error(),
                }
            }
        }
    }
}
