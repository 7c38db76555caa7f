//! Shared types for the breedlens detection front-end.

use serde::{Deserialize, Serialize};

/// A classification result returned by the detection service.
///
/// Produced by the backend, consumed read-only by the UI. Lifecycle is
/// request-scoped: each new submission discards the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Predicted breed label.
    pub breed: String,
    /// Prediction confidence as a percentage in `0.0..=100.0`.
    pub confidence: f64,
    /// URL of the server-side copy of the submitted image, when the
    /// service echoes one back. Used as the preview for URL submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Detection {
    /// The confidence formatted to exactly two decimal places, without
    /// the percent sign (e.g. `"93.27"`).
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format!("{:.2}", self.confidence)
    }
}

/// Configuration for the detection client.
///
/// All fields have defaults matching the detection service's own
/// limits, exposed as associated constants so the UI can reference
/// them (e.g. in hint text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Path (or absolute URL) of the detection endpoint.
    pub endpoint: String,
    /// Maximum accepted upload size in bytes. Submissions above this
    /// are rejected client-side before any network traffic.
    pub max_upload_bytes: usize,
}

impl DetectConfig {
    /// Default detection endpoint path.
    pub const DEFAULT_ENDPOINT: &'static str = "/detect";

    /// Default upload limit: 16 MiB, the service's request-size cap.
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_owned(),
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Everything that can go wrong between picking an image and rendering
/// a detection.
///
/// All variants collapse to a single user-visible error alert; the
/// `Display` string is the message shown. There is no retry and no
/// recovery beyond submitting again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The selected file had no content.
    #[error("the selected file is empty")]
    EmptyFile,

    /// The selected file exceeds the upload limit.
    #[error("image is too large ({size} bytes; the limit is {limit})")]
    TooLarge {
        /// Size of the rejected file in bytes.
        size: usize,
        /// Configured upload limit in bytes.
        limit: usize,
    },

    /// The filename does not carry an allowed image extension.
    #[error("unsupported file type: {0} (expected JPG or PNG)")]
    UnsupportedFile(String),

    /// The file content does not sniff as any known image format.
    #[error("{0} does not look like an image")]
    NotAnImage(String),

    /// The URL field was empty after trimming.
    #[error("enter an image URL")]
    EmptyUrl,

    /// The service reported an error message of its own.
    #[error("{0}")]
    Server(String),

    /// The service returned a failure status with no usable message.
    #[error("detection service returned HTTP {0}")]
    Http(u16),

    /// A network or browser API failure before a response was read.
    #[error("detection request failed: {0}")]
    Network(String),

    /// The response body could not be interpreted as a detection.
    #[error("unexpected response from the detection service: {0}")]
    MalformedResponse(String),
}
