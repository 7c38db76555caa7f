//! Drop zone component with drag-and-drop and file picker.

use breedlens_detect::has_allowed_extension;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Called with the raw file bytes and filename once a file has been
    /// picked or dropped and read. Content validation happens in the
    /// app's submission flow, not here.
    on_file: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts JPEG and PNG photos. Filenames with other extensions are
/// rejected inline, before the file is even read; deeper validation
/// (content sniffing, size limit) belongs to the submission flow.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Check, read, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so both behave identically.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(format!("Unsupported file type: {name}")));
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    error.set(None);
                    props.on_file.call((bytes.to_vec(), name));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "drop-zone drop-zone-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref err) = error() {
                p { class: "inline-error", "{err}" }
            }

            p { class: "drop-zone-hint",
                "Drop a dog photo here or"
            }

            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    accept: ".jpg,.jpeg,.png",
                    class: "visually-hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "drop-zone-formats",
                "JPEG or PNG"
            }
        }
    }
}
