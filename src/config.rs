use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub upload: UploadConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub tessdata_dir: Option<String>,
    pub ocr_language: String,
    pub render_dpi: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                allowed_origin: env::var("ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            },
            gemini: GeminiConfig {
                // An empty key is allowed at startup; completion calls fail
                // with MissingApiKey before any request is sent.
                api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            },
            upload: UploadConfig {
                dir: PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string())),
            },
            extraction: ExtractionConfig {
                tessdata_dir: env::var("TESSDATA_PREFIX").ok(),
                ocr_language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
                render_dpi: env::var("PDF_RENDER_DPI")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()?,
            },
        })
    }
}
