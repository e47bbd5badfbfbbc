pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use eventia_shared::UserStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state threaded into every handler. The store handle is
/// constructed once during process initialization and injected here;
/// handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub db_name: String,
    pub bcrypt_cost: u32,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/users", get(handlers::list_users))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
