//! Fetch-based client for the detection endpoint.
//!
//! Builds the multipart or JSON `POST` request, awaits the browser
//! fetch, and hands the body text to `breedlens-detect` for parsing.
//! One console debug line is emitted per request with the HTTP status
//! and elapsed time; everything else is returned as a [`DetectError`]
//! for the caller to render.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use breedlens_detect::{
    DetectConfig, DetectError, Detection, MULTIPART_FIELD, error_from_body, parse_detection,
    url_request_body,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};
use web_time::Instant;

/// Client for the `POST /detect` endpoint.
///
/// Stateless apart from its configuration; cheap to construct per
/// submission.
#[derive(Debug, Clone, Default)]
pub struct DetectClient {
    config: DetectConfig,
}

impl DetectClient {
    /// Create a client with the given configuration.
    #[must_use]
    pub const fn new(config: DetectConfig) -> Self {
        Self { config }
    }

    /// The client's configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Submit image bytes as multipart form data.
    ///
    /// The caller supplies the MIME type derived during validation
    /// (see `breedlens_detect::validate_file`); the `Content-Type`
    /// header of the request itself is left to the browser so it can
    /// set the multipart boundary.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Network`] for browser API or transport
    /// failures, [`DetectError::Server`] / [`DetectError::Http`] for
    /// failure responses, and [`DetectError::MalformedResponse`] when a
    /// success body cannot be parsed.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn detect_file(
        &self,
        filename: &str,
        bytes: &[u8],
        mime: &str,
    ) -> Result<Detection, DetectError> {
        let form = multipart_form(filename, bytes, mime)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(&self.config.endpoint, &init)
            .map_err(|e| js_error("failed to build request", &e))?;
        self.dispatch(&request).await
    }

    /// Submit a remote image URL as a JSON body.
    ///
    /// # Errors
    ///
    /// Same contract as [`detect_file`](Self::detect_file).
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn detect_url(&self, url: &str) -> Result<Detection, DetectError> {
        let body = url_request_body(url)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.config.endpoint, &init)
            .map_err(|e| js_error("failed to build request", &e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| js_error("failed to set content type", &e))?;
        self.dispatch(&request).await
    }

    /// Send the request and interpret the response.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn dispatch(&self, request: &Request) -> Result<Detection, DetectError> {
        let started = Instant::now();

        let window = web_sys::window()
            .ok_or_else(|| DetectError::Network("no global window".to_owned()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(request))
            .await
            .map_err(|e| js_error("fetch failed", &e))?
            .dyn_into()
            .map_err(|_| DetectError::Network("fetch did not yield a Response".to_owned()))?;

        let status = response.status();
        let body = response_text(&response).await?;

        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "detect: HTTP {status} in {}ms",
            started.elapsed().as_millis()
        )));

        if response.ok() {
            parse_detection(&body)
        } else {
            Err(error_from_body(status, &body))
        }
    }
}

/// Read the full response body as text.
///
/// An unreadable body is mapped to [`DetectError::Network`]; a body
/// that reads as something other than a string becomes the empty
/// string, which the parsers treat as a status-only failure.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn response_text(response: &Response) -> Result<String, DetectError> {
    let promise = response
        .text()
        .map_err(|e| js_error("failed to read response body", &e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("failed to read response body", &e))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Build the multipart body: a Blob with the sniffed MIME type,
/// appended under the endpoint's expected field name with the original
/// filename.
fn multipart_form(filename: &str, bytes: &[u8], mime: &str) -> Result<FormData, DetectError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|e| js_error("failed to create Blob", &e))?;

    let form = FormData::new().map_err(|e| js_error("failed to create FormData", &e))?;
    form.append_with_blob_and_filename(MULTIPART_FIELD, &blob, filename)
        .map_err(|e| js_error("failed to append file to form", &e))?;
    Ok(form)
}

/// Wrap a browser API failure in [`DetectError::Network`].
fn js_error(context: &str, value: &JsValue) -> DetectError {
    DetectError::Network(format!("{context}: {value:?}"))
}
