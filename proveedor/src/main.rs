use anyhow::Result;
use axum::{routing::get, Json, Router};
use eventia_shared::DomainServiceConfig;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

/// Placeholder provider service; business endpoints will be added
/// behind the gateway's /api/v1/proveedor prefix.
fn create_app(port: u16) -> Router {
    Router::new()
        .route(
            "/",
            get(move || async move {
                Json::<Value>(json!({
                    "message": format!("Servicio Proveedor funcionando en localhost:{}", port)
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

    let config = DomainServiceConfig::from_env("PROVEEDOR_PORT", 8004);
    let app = create_app(config.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Proveedor service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_reports_the_service_as_running() {
        let app = create_app(8004);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["message"],
            "Servicio Proveedor funcionando en localhost:8004"
        );
    }
}
