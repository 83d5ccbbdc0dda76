//! Optical recognition fallback for image-only pages.
//!
//! Rasterizes the document with `pdftoppm` (poppler-utils) and recognizes
//! each page image with `tesseract`. Both run as external processes; all
//! intermediate artifacts live in a scoped temp directory that is removed
//! when the guard drops, on success and on every failure path.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

use super::options::OcrOptions;

/// Prefix for the scoped temp directories holding rasterized pages.
const TEMP_PREFIX: &str = "pdfdiff-ocr-";

/// Recognition engine wrapping the external OCR toolchain.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    dpi: u32,
    lang: String,
}

impl OcrEngine {
    /// Create an engine from OCR options.
    pub fn new(options: &OcrOptions) -> Self {
        Self {
            dpi: options.dpi,
            lang: options.lang.clone(),
        }
    }

    /// Check if the OCR toolchain (pdftoppm and tesseract) is available.
    pub fn is_available() -> bool {
        let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
        let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

        if !pdftoppm {
            log::debug!("pdftoppm not found - install poppler-utils for OCR support");
        }
        if !tesseract {
            log::debug!("tesseract not found - install tesseract-ocr for OCR support");
        }

        pdftoppm && tesseract
    }

    /// Recognize text in a PDF document, page by page.
    ///
    /// Returns the recognized page texts concatenated in page order with a
    /// newline separator. A page whose recognition fails contributes no
    /// text; the caller decides whether a whole-document empty result is an
    /// error. Fails only when rasterization itself cannot produce any page
    /// image.
    pub fn recognize(&self, pdf_bytes: &[u8]) -> Result<String> {
        let temp_dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
        let pdf_path = temp_dir.path().join("input.pdf");
        std::fs::write(&pdf_path, pdf_bytes)?;

        let output_prefix = temp_dir.path().join("page");

        log::info!("rasterizing document for OCR (dpi={}, lang={})", self.dpi, self.lang);

        let pdftoppm = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(&pdf_path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| Error::Ocr(format!("failed to run pdftoppm: {}", e)))?;

        if !pdftoppm.status.success() {
            let stderr = String::from_utf8_lossy(&pdftoppm.stderr);
            return Err(Error::Ocr(format!("pdftoppm failed: {}", stderr.trim())));
        }

        let mut page_images: Vec<PathBuf> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        page_images.sort();

        if page_images.is_empty() {
            return Err(Error::Ocr("pdftoppm produced no page images".to_string()));
        }

        let mut page_texts = Vec::with_capacity(page_images.len());
        for (idx, image_path) in page_images.iter().enumerate() {
            let page_num = idx + 1;
            match self.recognize_page(image_path) {
                Ok(text) => {
                    log::debug!("page {}: OCR recognized {} chars", page_num, text.len());
                    if !text.trim().is_empty() {
                        page_texts.push(text.trim_end().to_string());
                    }
                }
                Err(e) => {
                    // Page-level failure degrades to an empty contribution.
                    log::warn!("OCR failed for page {}: {}", page_num, e);
                }
            }
        }

        Ok(page_texts.join("\n"))
    }

    /// Run tesseract on a single page image.
    fn recognize_page(&self, image_path: &std::path::Path) -> Result<String> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .arg("--psm")
            .arg("1") // automatic page segmentation with OSD
            .output()
            .map_err(|e| Error::Ocr(format!("failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::new(&OcrOptions::default())
    }
}
