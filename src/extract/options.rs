//! Extraction options and configuration.

/// Options for extracting text from PDF documents.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Error handling mode for per-page extraction failures
    pub error_mode: ErrorMode,

    /// OCR fallback configuration
    pub ocr: OcrOptions,

    /// Whether a pair of documents may be extracted in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (fail on any page error).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Disable the OCR fallback entirely.
    pub fn without_ocr(mut self) -> Self {
        self.ocr.enabled = false;
        self
    }

    /// Set the rasterization resolution used by the OCR fallback.
    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.ocr.dpi = dpi;
        self
    }

    /// Set the recognition language used by the OCR fallback.
    pub fn with_ocr_lang(mut self, lang: impl Into<String>) -> Self {
        self.ocr.lang = lang.into();
        self
    }

    /// Disable parallel extraction of document pairs.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            ocr: OcrOptions::default(),
            parallel: true,
        }
    }
}

/// Error handling mode for per-page extraction failures.
///
/// A failing page must not abort the whole document when other pages
/// still yield text, so the pipeline defaults to lenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page error
    Strict,
    /// Skip failing pages and continue
    #[default]
    Lenient,
}

/// OCR fallback configuration.
#[derive(Debug, Clone)]
pub struct OcrOptions {
    /// Whether the fallback may run at all
    pub enabled: bool,

    /// Rasterization resolution in DPI
    pub dpi: u32,

    /// Tesseract language code (e.g., "eng")
    pub lang: String,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            dpi: 300,
            lang: "eng".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .strict()
            .with_ocr_dpi(150)
            .with_ocr_lang("deu")
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.ocr.dpi, 150);
        assert_eq!(options.ocr.lang, "deu");
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.ocr.enabled);
        assert_eq!(options.ocr.dpi, 300);
        assert!(options.parallel);
    }

    #[test]
    fn test_without_ocr() {
        let options = ExtractOptions::new().without_ocr();
        assert!(!options.ocr.enabled);
    }
}
