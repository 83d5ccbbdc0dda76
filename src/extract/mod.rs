//! Text extraction from PDF documents.

mod extractor;
mod ocr;
mod options;

pub use extractor::{DocumentInfo, TextExtractor};
pub use ocr::OcrEngine;
pub use options::{ErrorMode, ExtractOptions, OcrOptions};
