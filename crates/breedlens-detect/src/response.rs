//! Response body parsing for the detection endpoint.
//!
//! The service is not consistent about failure shapes: errors arrive as
//! a non-2xx status with a JSON `{"error"}` body, as plain text, or --
//! when the model wrapper itself fails -- as a 200 whose body carries an
//! `error` field next to nothing else. All three must surface the same
//! way in the UI.

use serde::Deserialize;

use crate::types::{DetectError, Detection};

/// Loosely-typed mirror of whatever the service sends back. Every
/// field optional so one struct covers success, failure, and the
/// 200-with-error case.
#[derive(Debug, Deserialize)]
struct RawDetectResponse {
    #[serde(default)]
    breed: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

/// Parse the body of a 2xx response into a [`Detection`].
///
/// # Errors
///
/// Returns [`DetectError::Server`] when the body carries a non-empty
/// `error` field (the service reports some failures this way with a
/// 200 status), and [`DetectError::MalformedResponse`] when the body is
/// not JSON or lacks the breed/confidence pair.
pub fn parse_detection(body: &str) -> Result<Detection, DetectError> {
    let raw: RawDetectResponse = serde_json::from_str(body)
        .map_err(|e| DetectError::MalformedResponse(e.to_string()))?;

    if let Some(message) = raw.error.filter(|m| !m.is_empty()) {
        return Err(DetectError::Server(message));
    }

    match (raw.breed, raw.confidence) {
        (Some(breed), Some(confidence)) => Ok(Detection {
            breed,
            confidence,
            image_url: raw.image_url,
        }),
        _ => Err(DetectError::MalformedResponse(
            "missing breed or confidence".to_owned(),
        )),
    }
}

/// Derive the error for a non-2xx response.
///
/// Tries, in order: a JSON body with a non-empty `error` field, a
/// non-empty plain-text body, and finally a generic HTTP-status
/// fallback. Never fails -- a failing response always produces a
/// displayable error.
#[must_use]
pub fn error_from_body(status: u16, body: &str) -> DetectError {
    if let Ok(raw) = serde_json::from_str::<RawDetectResponse>(body)
        && let Some(message) = raw.error.filter(|m| !m.is_empty())
    {
        return DetectError::Server(message);
    }

    let text = body.trim();
    if text.is_empty() {
        DetectError::Http(status)
    } else {
        DetectError::Server(text.to_owned())
    }
}
