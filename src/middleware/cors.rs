// CORS configuration
// Applied in routes::create_router via tower-http's CORS layer

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::ServerConfig;

/// Build the CORS layer for the single configured front-end origin.
/// Credentialed requests forbid wildcards, so the origin is exact and
/// methods/headers mirror whatever the request asks for.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .expect("ALLOWED_ORIGIN must be a valid header value");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
