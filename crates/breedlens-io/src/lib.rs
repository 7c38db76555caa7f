//! breedlens-io: Browser I/O and Dioxus component library.
//!
//! Handles the fetch-based detection client, Blob-URL preview images,
//! analytics events, and provides the upload/URL/progress/result UI
//! components for the breedlens web application.

pub mod analytics;
pub mod client;
pub mod components;
pub mod preview;

pub use client::DetectClient;
pub use components::{ProgressBar, ResultPanel, UploadZone, UrlForm};
