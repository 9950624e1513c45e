//! Text extraction from uploaded documents.
//!
//! Dispatch is keyed on the lowercased file extension: plain text is read
//! directly, PDFs go through a two-tier text-layer/OCR pipeline, and images
//! go straight to OCR. Everything here is blocking; async callers bridge
//! with `tokio::task::spawn_blocking`.

pub mod ocr;
pub mod pdf;

use std::path::Path;
use std::sync::Arc;

pub use ocr::{OcrEngine, TesseractOcr};
pub use pdf::{PageRasterizer, PdfiumRasterizer};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0:?}")]
    UnsupportedType(String),

    #[error("file is not valid UTF-8: {0}")]
    Decode(String),

    #[error("PDF processing failed: {0}")]
    Pdf(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload types the extractor understands, keyed on the lowercased
/// file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Image,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" => Some(FileKind::Text),
            "pdf" => Some(FileKind::Pdf),
            "png" | "jpg" | "jpeg" => Some(FileKind::Image),
            _ => None,
        }
    }
}

/// Extracts text from files on disk, with OCR and page rasterization
/// behind trait objects so the PDF fast path stays observable in tests.
pub struct Extractor {
    rasterizer: Arc<dyn PageRasterizer>,
    ocr: Arc<dyn OcrEngine>,
}

impl Extractor {
    pub fn new(rasterizer: Arc<dyn PageRasterizer>, ocr: Arc<dyn OcrEngine>) -> Self {
        Self { rasterizer, ocr }
    }

    /// Extract text from `path`, choosing the method for the declared
    /// extension. The extension must already be lowercased by the caller.
    pub fn extract(&self, path: &Path, extension: &str) -> Result<String, ExtractError> {
        let kind = FileKind::from_extension(extension)
            .ok_or_else(|| ExtractError::UnsupportedType(extension.to_string()))?;

        match kind {
            FileKind::Text => read_text(path),
            FileKind::Pdf => pdf::extract(path, self.rasterizer.as_ref(), self.ocr.as_ref()),
            FileKind::Image => {
                let data = std::fs::read(path)?;
                self.ocr.recognize(&data)
            }
        }
    }
}

fn read_text(path: &Path) -> Result<String, ExtractError> {
    let data = std::fs::read(path)?;
    String::from_utf8(data).map_err(|e| ExtractError::Decode(e.to_string()))
}
