pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use eventia_shared::UserStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state; the store handle is the same one the
/// registration service writes to, injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub db_name: String,
    pub bcrypt_cost: u32,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/add_user", post(handlers::add_user))
        .route("/users", get(handlers::list_users))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
