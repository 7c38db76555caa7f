//! Dioxus UI components for breedlens.
//!
//! Provides the drag-and-drop upload zone, the remote-URL form, the
//! upload progress bar, and the detection result / error panel.

mod progress;
mod result;
mod upload;
mod url_form;

pub use progress::ProgressBar;
pub use result::ResultPanel;
pub use upload::UploadZone;
pub use url_form::UrlForm;
