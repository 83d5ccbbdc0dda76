//! PDF text extraction using lopdf.

use std::path::Path;

use chrono::{DateTime, Utc};
use lopdf::Document as LopdfDocument;
use serde::{Deserialize, Serialize};

use crate::detect::validate_pdf_bytes;
use crate::error::{Error, Result};

use super::ocr::OcrEngine;
use super::options::{ErrorMode, ExtractOptions};

/// Text extractor for a single PDF document.
///
/// Attempts direct extraction of the embedded text layer first; when that
/// yields nothing, falls back to optical recognition of the rasterized
/// pages. Whichever strategy satisfies the contract, the result is the
/// document's full text in page order, or [`Error::NoText`] when neither
/// strategy recovers anything.
pub struct TextExtractor {
    doc: LopdfDocument,
    // Original bytes, kept for the rasterization fallback.
    data: Vec<u8>,
    options: ExtractOptions,
}

impl TextExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(data, options)
    }

    /// Create an extractor from PDF bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Create an extractor from PDF bytes with custom options.
    pub fn from_bytes_with_options(
        data: impl Into<Vec<u8>>,
        options: ExtractOptions,
    ) -> Result<Self> {
        let data = data.into();
        validate_pdf_bytes(&data)?;

        let doc = LopdfDocument::load_mem(&data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        Ok(Self { doc, data, options })
    }

    /// Extract the full text content of the document.
    ///
    /// Runs the embedded-text strategy, then the recognition strategy if
    /// the first produced nothing. Page texts are concatenated in page
    /// order with a newline separator so line-based comparison downstream
    /// never merges a page-final line with the next page-initial line.
    ///
    /// # Errors
    ///
    /// [`Error::NoText`] when neither strategy recovers any text.
    pub fn extract(&self) -> Result<String> {
        let text = self.extract_embedded()?;
        if !text.trim().is_empty() {
            return Ok(text);
        }

        if self.options.ocr.enabled {
            if OcrEngine::is_available() {
                log::info!("no embedded text layer found, falling back to OCR");
                let recognized = OcrEngine::new(&self.options.ocr).recognize(&self.data)?;
                if !recognized.trim().is_empty() {
                    return Ok(recognized);
                }
            } else {
                log::debug!("OCR toolchain unavailable, skipping recognition fallback");
            }
        }

        Err(Error::NoText)
    }

    /// Direct extraction of the embedded text layer, page by page.
    ///
    /// Returns an empty string for a document with no text layer; the
    /// caller interprets emptiness as "try the other strategy".
    fn extract_embedded(&self) -> Result<String> {
        let pages = self.doc.get_pages();
        let mut page_texts = Vec::with_capacity(pages.len());

        for (&page_num, _) in pages.iter() {
            match self.doc.extract_text(&[page_num]) {
                Ok(text) => {
                    log::debug!("page {}: extracted {} chars", page_num, text.len());
                    if !text.trim().is_empty() {
                        page_texts.push(text.trim_end().to_string());
                    }
                }
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(Error::TextExtract(format!("page {}: {}", page_num, e)));
                    }
                    // Lenient mode: the page contributes no text.
                    log::warn!("failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        Ok(page_texts.join("\n"))
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Read document metadata from the info dictionary.
    pub fn info(&self) -> DocumentInfo {
        let mut info = DocumentInfo {
            pdf_version: self.version(),
            page_count: self.page_count(),
            ..Default::default()
        };

        if let Ok(Ok(info_ref)) = self.doc.trailer.get(b"Info").map(|o| o.as_reference()) {
            if let Ok(info_dict) = self.doc.get_dictionary(info_ref) {
                info.title = get_string_from_dict(info_dict, b"Title");
                info.author = get_string_from_dict(info_dict, b"Author");
                info.subject = get_string_from_dict(info_dict, b"Subject");
                info.producer = get_string_from_dict(info_dict, b"Producer");

                if let Some(date_str) = get_string_from_dict(info_dict, b"CreationDate") {
                    info.created = parse_pdf_date(&date_str);
                }
                if let Some(date_str) = get_string_from_dict(info_dict, b"ModDate") {
                    info.modified = parse_pdf_date(&date_str);
                }
            }
        }

        info
    }
}

/// Document metadata (title, author, etc.).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        lopdf::Object::String(bytes, _) => {
            // UTF-16BE first (PDF standard for Unicode)
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks(2)
                    .filter_map(|c| {
                        if c.len() == 2 {
                            Some(u16::from_be_bytes([c[0], c[1]]))
                        } else {
                            None
                        }
                    })
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                String::from_utf8(bytes.clone())
                    .ok()
                    .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
            }
        }
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:")?;

    // At minimum we need YYYY
    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = TextExtractor::from_bytes(&b"definitely not a pdf"[..]);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_from_bytes_rejects_empty() {
        let data: &[u8] = &[];
        let result = TextExtractor::from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_from_bytes_rejects_truncated_header() {
        let result = TextExtractor::from_bytes(&b"%PDF-1.7"[..]);
        // Valid magic but no document body behind it.
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_pdf_date() {
        let date = parse_pdf_date("D:20240115103045").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_pdf_date_minimal() {
        let date = parse_pdf_date("D:2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_parse_pdf_date_invalid() {
        assert!(parse_pdf_date("20240115").is_none());
        assert!(parse_pdf_date("D:20").is_none());
    }
}
