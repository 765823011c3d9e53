//! HTTP service: shared state, routing, and error mapping.

pub mod handlers;
pub mod seo;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::narrative::NarrativeGenerator;

/// Site-wide configuration baked into canonical URLs and the sitemap.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub base_url: String,
}

/// Shared application state: the catalog loaded once at startup plus the
/// stateless derivation engine. Handlers are pure readers of this state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: Arc<NarrativeGenerator>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            catalog: Arc::new(catalog),
            generator: Arc::new(NarrativeGenerator::new()),
            site: Arc::new(SiteConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }
}

/// Build the full router. Static routes win over the catch-all page route.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home_page))
        .route("/health", get(handlers::api::health_check))
        .route("/api/costs/search", get(handlers::api::search_costs))
        .route("/api/costs/:slug", get(handlers::api::get_cost))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        // Detail pages: "/how-much-does-{slug}-really-cost" is one path
        // segment, parsed by the handler.
        .route("/:page", get(handlers::pages::cost_page))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Errors surfaced by JSON API handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
