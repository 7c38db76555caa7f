//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).

use wasm_bindgen::prelude::*;

/// How an image reached the detection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionSource {
    /// File picker or drag-and-drop.
    File,
    /// Remote image URL.
    Url,
}

impl SubmissionSource {
    /// Event-name suffix: lowercase alphanumeric per Simple Analytics
    /// conventions.
    const fn suffix(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Url => "url",
        }
    }
}

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record a detection submission.
///
/// Fires an event named `detect_file` or `detect_url` depending on how
/// the image was supplied.
pub fn track_detect(source: SubmissionSource) {
    track_event(&format!("detect_{}", source.suffix()));
}
