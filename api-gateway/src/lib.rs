pub mod app_state;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod routes;

use app_state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the gateway router: the health endpoint plus the dispatch
/// fallback, wrapped in the uniform middleware stack (trace, CORS,
/// request logging, panic translation). The error-translation layer
/// applies to every path, matched or not, because unmatched paths go
/// through the same fallback.
pub fn create_app(state: AppState) -> Router {
    let middleware_layer = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .into_inner();

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .fallback(dispatch::dispatch)
        .layer(middleware_layer)
        .with_state(state)
}
