//! Request bodies for the detection endpoint.
//!
//! The endpoint accepts two shapes: multipart form data carrying the
//! image binary in the [`MULTIPART_FIELD`] field, or a JSON object
//! naming a remote image URL. The multipart body is assembled by the
//! browser (`FormData`); only the JSON body is built here.

use serde::Serialize;

use crate::types::DetectError;

/// Multipart form field carrying the image binary.
pub const MULTIPART_FIELD: &str = "file";

/// JSON request body for a URL submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrlDetectRequest<'a> {
    /// Remote image URL for the service to download and classify.
    pub image_url: &'a str,
}

/// Serialize the JSON body for a URL submission.
///
/// # Errors
///
/// Returns [`DetectError::Network`] if serialization fails (which a
/// two-field struct of strings should never do in practice).
pub fn url_request_body(url: &str) -> Result<String, DetectError> {
    serde_json::to_string(&UrlDetectRequest { image_url: url })
        .map_err(|e| DetectError::Network(format!("failed to encode request: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn url_body_shape() {
        let body = url_request_body("https://example.com/dog.jpg").unwrap();
        assert_eq!(body, r#"{"image_url":"https://example.com/dog.jpg"}"#);
    }

    #[test]
    fn url_body_escapes_quotes() {
        let body = url_request_body(r#"https://example.com/a"b.jpg"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["image_url"], r#"https://example.com/a"b.jpg"#);
    }
}
