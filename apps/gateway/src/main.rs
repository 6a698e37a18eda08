use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gateway::config::Config;
use gateway::identity::ForwardedHeaderIdentity;
use gateway::routes::build_router;
use gateway::state::AppState;
use gateway::status_client::StatusClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae gateway v{}", env!("CARGO_PKG_VERSION"));

    // A missing base URL must not prevent startup: each lookup degrades to its
    // route class's failure rule instead.
    if config.user_service_url.is_none() {
        warn!("USER_SERVICE_URL is not set; setup-status lookups will fail until it is configured");
    }

    // Initialize the user-status client
    let status = Arc::new(StatusClient::new(config.user_service_url.clone()));
    info!("User-status client initialized");

    // Identity comes from the headers set by the fronting auth proxy
    let identity = Arc::new(ForwardedHeaderIdentity);

    // Build app state
    let state = AppState {
        config: config.clone(),
        status,
        identity,
        started_at: Instant::now(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
