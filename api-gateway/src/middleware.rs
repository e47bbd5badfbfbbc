use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use std::time::Instant;
use tracing::{error, info, warn};

pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        info!("{} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    } else if status.is_client_error() {
        warn!("{} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    } else {
        error!("{} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    }

    response
}

/// Panic-to-JSON translation for the CatchPanicLayer, so even a
/// panicking handler produces a well-formed gateway response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };

    error!("Request handler panicked: {}", cause);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Internal server error" })),
    )
        .into_response()
}
