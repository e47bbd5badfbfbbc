use anyhow::Result;
use axum::{routing::get, Json, Router};
use eventia_shared::DomainServiceConfig;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

/// Placeholder service: only the root informational endpoint exists.
/// Future attendee endpoints land here and are reached through the
/// gateway under /api/v1/asistente.
fn create_app(port: u16) -> Router {
    Router::new()
        .route(
            "/",
            get(move || async move {
                Json::<Value>(json!({
                    "message": format!("Servicio Asistente funcionando en localhost:{}", port)
                }))
            }),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = DomainServiceConfig::from_env("ASISTENTE_PORT", 8003);
    let app = create_app(config.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Asistente service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
