//! Integration test: walk the full client-side contract for one file and one
//! URL submission -- validate, build the request, parse the response.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use breedlens_detect::{
    DetectConfig, DetectError, error_from_body, parse_detection, url_request_body, validate_file,
    validate_url,
};

/// Structurally shaped 1x1 PNG byte stream (signature + IHDR/IDAT/IEND).
/// Format sniffing reads only the signature, so chunk checksums are not
/// verified here.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x3A, 0x7E,
    0x9B, 0x55, // 1x1, 8-bit grayscale
    0x00, 0x00, 0x00, 0x0A, b'I', b'D', b'A', b'T', // IDAT
    0x78, 0x9C, 0x63, 0x60, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x73, 0x75, 0x01, 0x18,
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82, // IEND
];

#[test]
fn file_submission_contract() {
    let config = DetectConfig::default();

    // Validation derives the MIME type the multipart part will carry.
    let mime = validate_file("rex.png", TINY_PNG, &config).expect("tiny PNG should validate");
    assert_eq!(mime, "image/png");

    // A successful service response renders with two-decimal confidence.
    let detection = parse_detection(
        r#"{"breed": "Labrador Retriever", "confidence": 97.3189, "image_url": "/uploads/rex.png"}"#,
    )
    .expect("success body should parse");
    assert_eq!(detection.breed, "Labrador Retriever");
    assert_eq!(detection.confidence_label(), "97.32");
    assert_eq!(detection.image_url.as_deref(), Some("/uploads/rex.png"));
}

#[test]
fn url_submission_contract() {
    let url = validate_url(" https://example.com/dogs/rex.jpg ").expect("URL should validate");
    let body = url_request_body(url).expect("body should serialize");
    assert_eq!(body, r#"{"image_url":"https://example.com/dogs/rex.jpg"}"#);
}

#[test]
fn rejected_submissions_never_build_a_request() {
    let config = DetectConfig::default();

    // Each rejection happens strictly before request construction.
    assert!(validate_file("notes.txt", b"plain text", &config).is_err());
    assert!(validate_file("rex.png", b"", &config).is_err());
    assert!(validate_url("   ").is_err());
}

#[test]
fn every_failure_shape_yields_a_visible_error() {
    // JSON error body, plain-text body, empty body: all must produce a
    // displayable message, never a silent failure.
    let shapes = [
        error_from_body(400, r#"{"error": "No URL provided"}"#),
        error_from_body(500, "model initialization failed"),
        error_from_body(503, ""),
    ];
    for err in shapes {
        assert!(!err.to_string().is_empty());
    }

    // A 200 whose body reports an error is a failure too.
    let result = parse_detection(r#"{"error": "prediction failed"}"#);
    assert!(matches!(result, Err(DetectError::Server(_))));
}
