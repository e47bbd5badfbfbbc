use anyhow::Result;
use eventia_api_gateway::{app_state::AppState, create_app, proxy::ServiceClient, routes::RouteTable};
use eventia_shared::GatewayConfig;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = GatewayConfig::from_env();
    info!("Configuration loaded successfully");

    let client = ServiceClient::new(Duration::from_secs(config.request_timeout_secs))?;
    let routes = RouteTable::from_config(&config);
    let state = AppState::new(routes, client);

    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
