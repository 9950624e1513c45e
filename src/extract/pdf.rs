//! Two-tier PDF text extraction.
//!
//! The embedded text layer is read first, page by page in ascending page
//! order. Only when the whole document yields no text (scanned PDFs) is each
//! page rasterized and run through OCR, again in page order.

use std::path::Path;

use image::ImageFormat;
use lopdf::Document;
use pdfium_render::prelude::*;

use super::ocr::OcrEngine;
use super::ExtractError;

/// Renders every page of a PDF to an encoded image, in ascending page order.
pub trait PageRasterizer: Send + Sync {
    fn rasterize(&self, path: &Path) -> Result<Vec<Vec<u8>>, ExtractError>;
}

/// Page rasterizer backed by the system pdfium library, producing one PNG
/// buffer per page at a fixed DPI.
pub struct PdfiumRasterizer {
    dpi: f32,
}

impl PdfiumRasterizer {
    pub fn new(dpi: f32) -> Self {
        Self { dpi }
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<Vec<u8>>, ExtractError> {
        let data = std::fs::read(path)?;

        let pdfium = Pdfium::new(
            Pdfium::bind_to_system_library()
                .map_err(|e| ExtractError::Pdf(format!("pdfium bind failed: {e}")))?,
        );

        let doc = pdfium
            .load_pdf_from_byte_slice(&data, None)
            .map_err(|e| ExtractError::Pdf(format!("pdfium open failed: {e}")))?;

        let page_count = doc.pages().len() as usize;
        let mut png_buffers: Vec<Vec<u8>> = Vec::with_capacity(page_count);

        for index in 0..page_count {
            let page = doc.pages().get(index as u16).map_err(|e| {
                ExtractError::Pdf(format!("page {index} access failed: {e}"))
            })?;

            let width = (page.width().value * self.dpi / 72.0) as i32;
            let height = (page.height().value * self.dpi / 72.0) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(width)
                        .set_target_height(height),
                )
                .map_err(|e| ExtractError::Pdf(format!("render page {index} failed: {e}")))?;

            let mut png_bytes: Vec<u8> = Vec::new();
            bitmap
                .as_image()
                .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
                .map_err(|e| ExtractError::Pdf(format!("PNG encode page {index} failed: {e}")))?;

            png_buffers.push(png_bytes);
        }

        Ok(png_buffers)
    }
}

/// Extract text from the PDF at `path`. Returns the trimmed text layer when
/// one exists; otherwise OCRs every page and concatenates the results in
/// page order.
pub(crate) fn extract(
    path: &Path,
    rasterizer: &dyn PageRasterizer,
    ocr: &dyn OcrEngine,
) -> Result<String, ExtractError> {
    let text = text_layer(path)?;
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        return Ok(trimmed.to_string());
    }

    tracing::info!(path = %path.display(), "PDF has no text layer, falling back to per-page OCR");

    let pages = rasterizer.rasterize(path)?;
    let mut out = String::new();
    for page in &pages {
        out.push_str(&ocr.recognize(page)?);
    }
    Ok(out)
}

fn text_layer(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path)
        .map_err(|e| ExtractError::Pdf(format!("failed to parse PDF: {e}")))?;

    // get_pages returns a BTreeMap, so iteration is ascending page order.
    // Pages whose content streams cannot be decoded count as having no text.
    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        text.push_str(&doc.extract_text(&[*page_number]).unwrap_or_default());
    }
    Ok(text)
}
