//! Pre-network validation of files and URLs.
//!
//! Every rejection here happens before a request is built, so a
//! submission that fails validation never reaches the network.

use crate::types::{DetectConfig, DetectError};

/// File extensions the detection service accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check whether a filename has an allowed image extension.
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Validate an uploaded file and derive its MIME type.
///
/// Checks, in order: non-empty, within the configured size limit, an
/// allowed extension, and content whose magic bytes identify a real
/// image format. Decoding never happens here -- only format sniffing.
///
/// Returns the MIME type of the sniffed format (e.g. `"image/png"`)
/// for use in the multipart request.
///
/// # Errors
///
/// Returns [`DetectError::EmptyFile`] for zero-length content,
/// [`DetectError::TooLarge`] above the size limit,
/// [`DetectError::UnsupportedFile`] for a disallowed extension, and
/// [`DetectError::NotAnImage`] when the content is not a recognizable
/// image format.
pub fn validate_file(
    name: &str,
    bytes: &[u8],
    config: &DetectConfig,
) -> Result<&'static str, DetectError> {
    if bytes.is_empty() {
        return Err(DetectError::EmptyFile);
    }
    if bytes.len() > config.max_upload_bytes {
        return Err(DetectError::TooLarge {
            size: bytes.len(),
            limit: config.max_upload_bytes,
        });
    }
    if !has_allowed_extension(name) {
        return Err(DetectError::UnsupportedFile(name.to_owned()));
    }

    let format =
        image::guess_format(bytes).map_err(|_| DetectError::NotAnImage(name.to_owned()))?;
    Ok(format.to_mime_type())
}

/// Validate a remote image URL.
///
/// Trims surrounding whitespace and rejects an empty result. Anything
/// further (scheme, reachability, content) is the service's problem --
/// it downloads the image itself.
///
/// # Errors
///
/// Returns [`DetectError::EmptyUrl`] when the trimmed URL is empty.
pub fn validate_url(raw: &str) -> Result<&str, DetectError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(DetectError::EmptyUrl);
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// PNG file signature -- enough for format sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG SOI marker plus an APP0 prefix.
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    fn config() -> DetectConfig {
        DetectConfig::default()
    }

    // --- has_allowed_extension tests ---

    #[test]
    fn extension_accepts_allowed_cases() {
        assert!(has_allowed_extension("rex.jpg"));
        assert!(has_allowed_extension("rex.jpeg"));
        assert!(has_allowed_extension("rex.png"));
        assert!(has_allowed_extension("REX.PNG"));
    }

    #[test]
    fn extension_rejects_other_types() {
        assert!(!has_allowed_extension("rex.gif"));
        assert!(!has_allowed_extension("rex.pdf"));
        assert!(!has_allowed_extension("rex.jpg.exe"));
        assert!(!has_allowed_extension("rex"));
        assert!(!has_allowed_extension(""));
    }

    // --- validate_file tests ---

    #[test]
    fn file_png_magic_accepted_with_mime() {
        let mime = validate_file("rex.png", PNG_MAGIC, &config()).unwrap();
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn file_jpeg_magic_accepted_with_mime() {
        let mime = validate_file("rex.jpg", JPEG_MAGIC, &config()).unwrap();
        assert_eq!(mime, "image/jpeg");
    }

    #[test]
    fn file_empty_rejected() {
        let result = validate_file("rex.png", &[], &config());
        assert!(matches!(result, Err(DetectError::EmptyFile)));
    }

    #[test]
    fn file_oversized_rejected() {
        let config = DetectConfig {
            max_upload_bytes: 4,
            ..DetectConfig::default()
        };
        let result = validate_file("rex.png", PNG_MAGIC, &config);
        assert!(matches!(
            result,
            Err(DetectError::TooLarge { size: 8, limit: 4 })
        ));
    }

    #[test]
    fn file_bad_extension_rejected_before_sniffing() {
        // Valid PNG content behind a disallowed extension still fails.
        let result = validate_file("rex.gif", PNG_MAGIC, &config());
        assert!(matches!(result, Err(DetectError::UnsupportedFile(ref n)) if n == "rex.gif"));
    }

    #[test]
    fn file_non_image_content_rejected() {
        let result = validate_file("rex.png", b"definitely not pixels", &config());
        assert!(matches!(result, Err(DetectError::NotAnImage(ref n)) if n == "rex.png"));
    }

    // --- validate_url tests ---

    #[test]
    fn url_trimmed_value_returned() {
        let url = validate_url("  https://example.com/dog.jpg \n").unwrap();
        assert_eq!(url, "https://example.com/dog.jpg");
    }

    #[test]
    fn url_empty_rejected() {
        assert!(matches!(validate_url(""), Err(DetectError::EmptyUrl)));
        assert!(matches!(validate_url("   "), Err(DetectError::EmptyUrl)));
        assert!(matches!(validate_url("\t\n"), Err(DetectError::EmptyUrl)));
    }
}
