use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Error type shared by the authentication services. Every variant maps
/// to a fixed HTTP status and a `{"detail": ...}` JSON body; store and
/// hashing failures are reported as a generic 500 with the underlying
/// cause logged, never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Usuario ya existe")]
    UserExists,

    #[error("Usuario no registrado.")]
    UserNotRegistered,

    #[error("Contraseña incorrecta.")]
    WrongPassword,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::UserExists | ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::UserNotRegistered => StatusCode::NOT_FOUND,
            ServiceError::WrongPassword => StatusCode::UNAUTHORIZED,
            ServiceError::Database(_) | ServiceError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            ServiceError::Database(e) => {
                error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            ServiceError::Hash(e) => {
                error!("Password hashing error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_specific_statuses() {
        assert_eq!(ServiceError::UserExists.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::UserNotRegistered.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServiceError::WrongPassword.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::InvalidInput("username must not be empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(
            ServiceError::Database(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_match_the_wire_format() {
        assert_eq!(ServiceError::UserExists.to_string(), "Usuario ya existe");
        assert_eq!(
            ServiceError::UserNotRegistered.to_string(),
            "Usuario no registrado."
        );
        assert_eq!(
            ServiceError::WrongPassword.to_string(),
            "Contraseña incorrecta."
        );
    }
}
