// OCR engine abstraction and the tesseract-backed implementation

use tesseract_rs::TesseractAPI;

use super::ExtractError;

// Used when TESSDATA_PREFIX is not set.
const DEFAULT_TESSDATA_DIR: &str = "/usr/share/tessdata";

/// Recognizes text in an encoded image (PNG or JPEG bytes).
///
/// Implementations are blocking and must be callable from multiple
/// requests at once.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, ExtractError>;
}

/// OCR backed by a tesseract engine instance per call. Images are decoded
/// and flattened to 8-bit grayscale before recognition.
pub struct TesseractOcr {
    tessdata_dir: Option<String>,
    language: String,
}

impl TesseractOcr {
    pub fn new(tessdata_dir: Option<String>, language: String) -> Self {
        Self { tessdata_dir, language }
    }

    fn tessdata_dir(&self) -> &str {
        self.tessdata_dir.as_deref().unwrap_or(DEFAULT_TESSDATA_DIR)
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &[u8]) -> Result<String, ExtractError> {
        let decoded = image::load_from_memory(image)
            .map_err(|e| ExtractError::Ocr(format!("failed to decode image: {e}")))?;
        let gray = decoded.to_luma8();
        let (width, height) = gray.dimensions();

        let api = TesseractAPI::new();
        api.init(self.tessdata_dir(), &self.language)
            .map_err(|e| ExtractError::Ocr(format!("tesseract init failed: {e}")))?;
        api.set_image(
            gray.as_raw(),
            width as i32,
            height as i32,
            1,
            width as i32,
        )
        .map_err(|e| ExtractError::Ocr(format!("tesseract rejected image: {e}")))?;

        api.get_utf8_text()
            .map_err(|e| ExtractError::Ocr(format!("text recognition failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tessdata_dir_falls_back_to_default() {
        let engine = TesseractOcr::new(None, "eng".to_string());
        assert_eq!(engine.tessdata_dir(), DEFAULT_TESSDATA_DIR);

        let engine = TesseractOcr::new(Some("/opt/tessdata".to_string()), "eng".to_string());
        assert_eq!(engine.tessdata_dir(), "/opt/tessdata");
    }

    #[test]
    fn undecodable_bytes_are_an_ocr_error() {
        let engine = TesseractOcr::new(None, "eng".to_string());
        let err = engine.recognize(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ExtractError::Ocr(_)));
    }
}
