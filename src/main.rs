use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::Config;

/// Shared application state — cheap to clone (pool is an Arc internally).
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,products_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Products Service  —  Rust + Axum    ║");
    info!("╚══════════════════════════════════════╝");

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await?;
    info!("Database connection pool established.");

    // Run pending migrations
    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations complete.");

    let state = AppState { db: pool };
    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
