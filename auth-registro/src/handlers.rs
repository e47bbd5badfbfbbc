use crate::AppState;
use axum::{extract::State, Json};
use eventia_shared::{
    password, HealthResponse, RegisterResponse, ServiceError, UserIn, UsersResponse,
};
use tracing::info;

/// Register a new user: validate, hash, insert. The store's uniqueness
/// constraint is the only arbiter for duplicate usernames, so two
/// concurrent registrations of the same name resolve to one winner.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserIn>,
) -> Result<Json<RegisterResponse>, ServiceError> {
    payload.validate().map_err(ServiceError::InvalidInput)?;

    let hashed = password::hash_password(&payload.password, state.bcrypt_cost)?;
    let id = state.store.insert(&payload.username, &hashed).await?;

    info!("Registered user '{}'", payload.username);

    Ok(Json(RegisterResponse {
        message: format!("Usuario '{}' registrado correctamente", payload.username),
        id: id.to_string(),
    }))
}

/// List registered usernames. Password hashes never leave the store.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ServiceError> {
    let usuarios = state.store.list_usernames().await?;
    Ok(Json(UsersResponse { usuarios }))
}

/// Ping the store and report reachability.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ServiceError> {
    state.store.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        db: state.db_name.clone(),
    }))
}
