//! breedlens-detect: Detection wire model and client-side validation (sans-IO).
//!
//! Everything the upload widget needs to know about the detection
//! service without touching a browser API: the request/response data
//! model, pre-network validation of files and URLs, and parsing of the
//! service's (not entirely consistent) response bodies.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and strings and returns structured data. All browser and
//! network interaction lives in `breedlens-io`.

pub mod request;
pub mod response;
pub mod types;
pub mod validate;

pub use request::{MULTIPART_FIELD, UrlDetectRequest, url_request_body};
pub use response::{error_from_body, parse_detection};
pub use types::{DetectConfig, DetectError, Detection};
pub use validate::{ALLOWED_EXTENSIONS, has_allowed_extension, validate_file, validate_url};
