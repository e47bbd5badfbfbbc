use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Gateway-side failure taxonomy. Connectivity failures keep their
/// reason in the response body; anything unexpected collapses to a
/// generic 500 with the cause logged but not leaked.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No service handles path '{0}'")]
    RouteNotFound(String),

    #[error("Method not allowed for path '{0}'")]
    MethodNotAllowed(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Error connecting to service: {0}")]
    Connectivity(String),

    #[error("Internal server error")]
    Unexpected(String),
}

impl GatewayError {
    /// Classify a downstream client error: failures to reach the
    /// service (refused connection, DNS, timeout) are connectivity
    /// failures; everything else (a non-JSON downstream body, a
    /// request that could not even be built) is unexpected.
    pub fn from_downstream(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            GatewayError::Connectivity(err.to_string())
        } else {
            GatewayError::Unexpected(err.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::Connectivity(_) | GatewayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::Unexpected(cause) = &self {
            error!("Unexpected gateway error: {}", cause);
        }

        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
