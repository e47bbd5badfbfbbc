use crate::AppState;
use axum::{extract::State, Json};
use eventia_shared::{
    password, HealthResponse, MessageResponse, ServiceError, UserIn, UsersResponse,
};
use tracing::{info, warn};

/// Authenticate a user. An unknown username is reported as not
/// registered (404) before any hash verification happens; a known
/// username with a wrong password is unauthorized (401).
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<UserIn>,
) -> Result<Json<MessageResponse>, ServiceError> {
    payload.validate().map_err(ServiceError::InvalidInput)?;

    let credential = state
        .store
        .find(&payload.username)
        .await?
        .ok_or(ServiceError::UserNotRegistered)?;

    if !password::verify_password(&payload.password, &credential.password_hash)? {
        warn!("Failed login attempt for user '{}'", payload.username);
        return Err(ServiceError::WrongPassword);
    }

    Ok(Json(MessageResponse {
        message: format!(
            "Usuario '{}' autenticado correctamente.",
            payload.username
        ),
    }))
}

/// Dev convenience endpoint: insert a credential directly, bypassing
/// the registration service.
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<UserIn>,
) -> Result<Json<MessageResponse>, ServiceError> {
    payload.validate().map_err(ServiceError::InvalidInput)?;

    let hashed = password::hash_password(&payload.password, state.bcrypt_cost)?;
    state.store.insert(&payload.username, &hashed).await?;

    info!("Added user '{}' via /add_user", payload.username);

    Ok(Json(MessageResponse {
        message: format!("Usuario '{}' agregado a AuthLogin.", payload.username),
    }))
}

/// Same listing as the registration service; both read one store.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ServiceError> {
    let usuarios = state.store.list_usernames().await?;
    Ok(Json(UsersResponse { usuarios }))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ServiceError> {
    state.store.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        db: state.db_name.clone(),
    }))
}
