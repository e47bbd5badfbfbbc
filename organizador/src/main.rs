use anyhow::Result;
use axum::{routing::get, Json, Router};
use eventia_shared::DomainServiceConfig;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

/// Placeholder organizer service; business endpoints will be added
/// behind the gateway's /api/v1/organizador prefix.
fn create_app(port: u16) -> Router {
    Router::new()
        .route(
            "/",
            get(move || async move {
                Json::<Value>(json!({
                    "message": format!("Servicio Organizador funcionando en localhost:{}", port)
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

    let config = DomainServiceConfig::from_env("ORGANIZADOR_PORT", 8005);
    let app = create_app(config.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Organizador service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
