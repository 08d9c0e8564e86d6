//! Pathways API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pathways_api::config::Settings;
use pathways_api::routes;
use pathways_api::state::AppState;
use pathways_api::sweeper::spawn_idle_sweeper;
use pathways_conversation::application::dispatcher::StageDispatcher;
use pathways_conversation::application::enrichment::ImageEnrichment;
use pathways_conversation::application::generation::ContentGenerationClient;
use pathways_conversation::application::registry::SessionRegistry;
use pathways_core::clock::{Clock, SystemClock};
use pathways_worqhat::{WorqhatImageGenerator, WorqhatTextGenerator, build_http_client};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Pathways API server");

    // Read configuration from environment.
    let settings = Settings::from_env()?;

    // Build collaborator clients.
    let http = build_http_client(&settings.worqhat)?;
    let text_generator = Arc::new(WorqhatTextGenerator::new(http.clone(), &settings.worqhat));
    let image_generator = Arc::new(WorqhatImageGenerator::new(http, &settings.worqhat));
    let dispatcher = StageDispatcher::new(
        ContentGenerationClient::new(text_generator, settings.model_id.clone()),
        ImageEnrichment::new(image_generator),
    );

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let registry = Arc::new(SessionRegistry::new());
    let app_state = AppState::new(Arc::clone(&clock), Arc::clone(&registry), Arc::new(dispatcher));

    spawn_idle_sweeper(
        registry,
        clock,
        settings.session_idle_timeout,
        settings.sweep_interval,
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/sessions", routes::conversation::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
