//! # pdfdiff
//!
//! Classified line-level text comparison between two PDF documents.
//!
//! This library extracts the full text of two PDFs (falling back to OCR
//! for scanned, image-only pages) and produces an ordered sequence of
//! classified change records plus an aggregate summary, ready for
//! color-coded rendering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfdiff::{compare_files, render};
//!
//! fn main() -> pdfdiff::Result<()> {
//!     let report = compare_files("old.pdf", "new.pdf")?;
//!
//!     println!("{}", render::to_text(&report));
//!     println!(
//!         "+{} -{} ~{}",
//!         report.summary.added, report.summary.removed, report.summary.modified
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction**: direct per-page text extraction via lopdf; documents
//!   without an embedded text layer are rasterized and recognized with the
//!   external `pdftoppm`/`tesseract` toolchain. A document from which no
//!   strategy recovers text fails with [`Error::NoText`].
//! - **Comparison**: an LCS line diff classifies every line as added,
//!   removed, modified, or unchanged; adjacent delete/insert runs pair
//!   positionally into modifications.
//!
//! The two extractions of a comparison are independent and run in
//! parallel by default.

pub mod detect;
pub mod diff;
pub mod error;
pub mod extract;
pub mod render;

// Re-export commonly used types
pub use detect::{is_pdf_bytes, PdfFormat};
pub use diff::{diff_lines, Change, ChangeKind, DiffReport, Summary};
pub use error::{Error, Result};
pub use extract::{DocumentInfo, ErrorMode, ExtractOptions, OcrOptions, TextExtractor};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the full text of a PDF document.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.pdf").unwrap();
/// let text = pdfdiff::extract_text(&data).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text(data: &[u8]) -> Result<String> {
    extract_text_with_options(data, ExtractOptions::default())
}

/// Extract the full text of a PDF document with custom options.
pub fn extract_text_with_options(data: &[u8], options: ExtractOptions) -> Result<String> {
    let extractor = TextExtractor::from_bytes_with_options(data, options)?;
    extractor.extract()
}

/// Extract the full text of a PDF file.
pub fn extract_text_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let extractor = TextExtractor::open(path)?;
    extractor.extract()
}

/// Compare two PDF documents given as bytes.
///
/// Extracts both documents (in parallel unless disabled) and returns the
/// classified line diff.
pub fn compare_bytes(old: &[u8], new: &[u8]) -> Result<DiffReport> {
    compare_bytes_with_options(old, new, ExtractOptions::default())
}

/// Compare two PDF documents given as bytes, with custom options.
pub fn compare_bytes_with_options(
    old: &[u8],
    new: &[u8],
    options: ExtractOptions,
) -> Result<DiffReport> {
    let (old_text, new_text) = if options.parallel {
        let (old_result, new_result) = rayon::join(
            || extract_text_with_options(old, options.clone()),
            || extract_text_with_options(new, options.clone()),
        );
        (old_result?, new_result?)
    } else {
        (
            extract_text_with_options(old, options.clone())?,
            extract_text_with_options(new, options)?,
        )
    };

    Ok(diff_lines(&old_text, &new_text))
}

/// Compare two PDF files.
///
/// # Example
///
/// ```no_run
/// let report = pdfdiff::compare_files("old.pdf", "new.pdf").unwrap();
/// println!("{} changed lines", report.summary.total());
/// ```
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> Result<DiffReport> {
    compare_files_with_options(old, new, ExtractOptions::default())
}

/// Compare two PDF files with custom options.
pub fn compare_files_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    old: P,
    new: Q,
    options: ExtractOptions,
) -> Result<DiffReport> {
    let old_data = std::fs::read(old)?;
    let new_data = std::fs::read(new)?;
    compare_bytes_with_options(&old_data, &new_data, options)
}

/// Builder for configuring and running PDF comparisons.
///
/// # Example
///
/// ```no_run
/// use pdfdiff::PdfDiff;
///
/// let report = PdfDiff::new()
///     .without_ocr()
///     .sequential()
///     .compare_files("old.pdf", "new.pdf")?;
/// # Ok::<(), pdfdiff::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfDiff {
    options: ExtractOptions,
}

impl PdfDiff {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on any per-page extraction error instead of skipping the page.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Disable the OCR fallback.
    pub fn without_ocr(mut self) -> Self {
        self.options = self.options.without_ocr();
        self
    }

    /// Set the OCR rasterization resolution.
    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.options = self.options.with_ocr_dpi(dpi);
        self
    }

    /// Set the OCR recognition language.
    pub fn with_ocr_lang(mut self, lang: impl Into<String>) -> Self {
        self.options = self.options.with_ocr_lang(lang);
        self
    }

    /// Extract the two documents one after the other instead of in parallel.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Compare two documents given as bytes.
    pub fn compare_bytes(&self, old: &[u8], new: &[u8]) -> Result<DiffReport> {
        compare_bytes_with_options(old, new, self.options.clone())
    }

    /// Compare two PDF files.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        old: P,
        new: Q,
    ) -> Result<DiffReport> {
        compare_files_with_options(old, new, self.options.clone())
    }

    /// Extract the full text of a single document.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        extract_text_with_options(data, self.options.clone())
    }

    /// Access the configured options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }
}
