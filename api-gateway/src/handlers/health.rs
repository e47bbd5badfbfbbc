use crate::routes::SERVICE_NAMES;
use axum::Json;
use serde_json::{json, Value};

/// Gateway health check: reports the gateway itself as up and lists
/// the services it fronts. Downstream reachability is not probed here;
/// each service exposes its own /health.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "services": SERVICE_NAMES,
    }))
}
