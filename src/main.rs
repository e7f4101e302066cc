use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use choose_marketers::config::AppConfig;
use choose_marketers::db::{DocumentStore, SqliteStore};
use choose_marketers::handlers;
use choose_marketers::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store: Option<Box<dyn DocumentStore>> = match config.database_url.as_deref() {
        Some(path) => match SqliteStore::open(path) {
            Ok(store) => {
                tracing::info!(path, "document store ready");
                Some(Box::new(store))
            }
            Err(e) => {
                tracing::warn!("failed to open document store: {e:#}");
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, bookings will not be persisted");
            None
        }
    };

    let state = Arc::new(AppState {
        store,
        config: config.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handlers::health::root))
        .route("/api/hello", get(handlers::health::hello))
        .route("/test", get(handlers::health::test_database))
        .route("/bookings", post(handlers::bookings::create_booking))
        .route("/bookings", get(handlers::bookings::list_bookings))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
