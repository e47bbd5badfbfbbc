use crate::app_state::AppState;
use crate::error::GatewayError;
use crate::routes::RouteKind;
use axum::{
    body::Body,
    extract::{Request, State},
    response::{IntoResponse, Response},
    Json,
};
use eventia_shared::UserIn;
use tracing::debug;

/// Fallback handler covering every path the gateway does not serve
/// itself: resolves the downstream route, forwards the request and
/// relays the downstream status and JSON body unchanged.
pub async fn dispatch(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let method = request.method().clone();

    let (route, remainder) = state
        .routes
        .resolve(&path)
        .ok_or_else(|| GatewayError::RouteNotFound(path.clone()))?;

    // The forwarded method surface is deliberately narrow: GET for the
    // passthrough services, a fixed POST for the two auth routes.
    if method != route.method {
        return Err(GatewayError::MethodNotAllowed(path.clone()));
    }

    debug!("Forwarding {} {} to {}", method, path, route.name);

    let (status, body) = match &route.kind {
        RouteKind::Fixed { target } => {
            let payload = read_payload(request).await?;
            state
                .client
                .forward_fixed(&route.base_url, target, &payload)
                .await?
        }
        RouteKind::Passthrough => {
            state
                .client
                .forward_passthrough(&route.base_url, remainder, query.as_deref())
                .await?
        }
    };

    Ok((status, Json(body)).into_response())
}

/// Typed boundary validation for fixed routes: the body must be a JSON
/// credentials payload before anything is forwarded.
async fn read_payload(request: Request<Body>) -> Result<UserIn, GatewayError> {
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| GatewayError::InvalidBody(e.to_string()))?;

    let payload: UserIn =
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::InvalidBody(e.to_string()))?;

    payload.validate().map_err(GatewayError::InvalidBody)?;

    Ok(payload)
}
