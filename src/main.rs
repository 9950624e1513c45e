use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use narraive::extract::{Extractor, PdfiumRasterizer, TesseractOcr};
use narraive::llm::{CompletionClient, GeminiClient};
use narraive::routes::create_router;
use narraive::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "narraive=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Uploads are spooled here for the lifetime of each request
    tokio::fs::create_dir_all(&config.upload.dir).await?;

    // Wire up extraction and the completion client
    let ocr = Arc::new(TesseractOcr::new(
        config.extraction.tessdata_dir.clone(),
        config.extraction.ocr_language.clone(),
    ));
    let rasterizer = Arc::new(PdfiumRasterizer::new(config.extraction.render_dpi));
    let extractor = Arc::new(Extractor::new(rasterizer, ocr));
    let completion: Arc<dyn CompletionClient> =
        Arc::new(GeminiClient::new(&config.gemini.api_key, &config.gemini.model));

    // Create shared state
    let state = AppState {
        config: config.clone(),
        completion,
        extractor,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
