// Server binary entry point.
//
// Usage: cargo run --bin server
// Configuration via environment: CATALOG_PATH, BASE_URL, PORT.

use std::net::SocketAddr;

use cost_explainer::{create_router, AppState, Catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cost_explainer=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "content/costs.json".to_string());

    let base_url = std::env::var("BASE_URL")
        .unwrap_or_else(|_| "https://howmuchdoesitreallycost.com".to_string());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {}", catalog_path);
    tracing::info!("  BASE_URL: {}", base_url);
    tracing::info!("  PORT: {}", port);

    let catalog = Catalog::load(&catalog_path)?;
    tracing::info!("Loaded {} cost records", catalog.len());

    let state = AppState::new(catalog, base_url);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
