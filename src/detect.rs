//! PDF input validation.
//!
//! Cheap checks that run before any parsing: the `%PDF-` magic header,
//! a sane version number, and the input-size guard.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Maximum accepted input size in bytes (10 MiB).
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Validate document bytes before handing them to the parser.
///
/// Checks the size guard first, then the header. Returns the detected
/// format on success.
///
/// # Errors
///
/// * [`Error::TooLarge`] if the input exceeds [`MAX_PDF_BYTES`]
/// * [`Error::UnknownFormat`] if the header is missing or malformed
/// * [`Error::UnsupportedVersion`] if the version digits are implausible
pub fn validate_pdf_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() > MAX_PDF_BYTES {
        return Err(Error::TooLarge(data.len()));
    }
    detect_format(data)
}

/// Detect PDF format from the leading bytes of a document.
pub fn detect_format(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // Version string follows the magic, e.g. "1.7" from "%PDF-1.7"
    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check if a version string looks like "1.0" through "2.0".
fn is_valid_version(version: &str) -> bool {
    let mut chars = version.chars();
    matches!(
        (chars.next(), chars.next(), chars.next(), chars.next()),
        (Some(major), Some('.'), Some(minor), None)
            if major.is_ascii_digit() && minor.is_ascii_digit()
    )
}

/// Check if bytes represent a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        let format = detect_format(data).unwrap();
        assert_eq!(format.version, "1.7");
    }

    #[test]
    fn test_detect_pdf_2_0() {
        let data = b"%PDF-2.0\n%\xe2\xe3\xcf\xd3";
        let format = detect_format(data).unwrap();
        assert_eq!(format.version, "2.0");
    }

    #[test]
    fn test_detect_invalid_format() {
        let data = b"<!DOCTYPE html>";
        let result = detect_format(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_empty_and_short() {
        assert!(matches!(detect_format(b""), Err(Error::UnknownFormat)));
        assert!(matches!(detect_format(b"%PDF"), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_validate_rejects_oversized() {
        let data = vec![0u8; MAX_PDF_BYTES + 1];
        assert!(matches!(
            validate_pdf_bytes(&data),
            Err(Error::TooLarge(_))
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_version_validation() {
        assert!(is_valid_version("1.0"));
        assert!(is_valid_version("1.7"));
        assert!(is_valid_version("2.0"));
        assert!(!is_valid_version("10.0"));
        assert!(!is_valid_version("abc"));
    }
}
