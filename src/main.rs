use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use visitdesk::config::AppConfig;
use visitdesk::handlers;
use visitdesk::services::clock::SystemClock;
use visitdesk::services::submission::log::LogSink;
use visitdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("serving pages in locale {}", config.locale.as_str());

    let state = Arc::new(AppState {
        config: config.clone(),
        clock: Box::new(SystemClock),
        sink: Box::new(LogSink),
    });

    let api = Router::new()
        .route("/bookings", post(handlers::api::create_booking))
        .route("/slots", get(handlers::api::get_slots))
        .route("/calendar", get(handlers::api::get_calendar))
        .route("/features", get(handlers::api::get_features))
        .layer(CorsLayer::permissive());

    let app = Router::new()
        .route("/", get(handlers::landing::landing_page))
        .route("/book", get(handlers::booking::booking_page))
        .route("/book", post(handlers::booking::submit_booking))
        .route("/styles.css", get(handlers::landing::styles))
        .route("/health", get(handlers::health::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
