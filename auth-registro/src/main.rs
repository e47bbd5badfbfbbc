use anyhow::Result;
use eventia_auth_registro::{create_app, AppState};
use eventia_shared::{AuthServiceConfig, PgUserStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = AuthServiceConfig::from_env("AUTH_REGISTRO_PORT", 8002);
    info!("Configuration loaded successfully");

    let store = PgUserStore::connect(&config.database_url).await?;
    store.migrate().await?;

    let state = AppState {
        store: Arc::new(store),
        db_name: config.db_name.clone(),
        bcrypt_cost: config.bcrypt_cost,
    };

    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("AuthRegistro service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
