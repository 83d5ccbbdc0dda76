//! Error types for the pdfdiff library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting and comparing PDF text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The input exceeds the maximum accepted size.
    #[error("Input of {0} bytes exceeds the {max} byte limit", max = crate::detect::MAX_PDF_BYTES)]
    TooLarge(usize),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error decoding text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// No text could be recovered from the document by any strategy.
    ///
    /// Raised after both embedded-text extraction and the OCR fallback
    /// produced nothing. Callers must not diff a document in this state.
    #[error("no text could be extracted from the PDF")]
    NoText,

    /// The OCR fallback failed before any page could be recognized.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::NoText;
        assert_eq!(err.to_string(), "no text could be extracted from the PDF");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_too_large_mentions_limit() {
        let err = Error::TooLarge(20 * 1024 * 1024);
        assert!(err.to_string().contains("exceeds"));
    }
}
