use serde::{Deserialize, Serialize};

// Request/response types shared by the authentication services. Field
// names follow the public wire format of the platform, which is Spanish
// on the user-facing side ("usuarios").

/// Credentials payload accepted by /register, /login and /add_user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIn {
    pub username: String,
    pub password: String,
}

impl UserIn {
    /// Boundary validation: both fields must be non-empty. Runs before
    /// any handler logic touches the store.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("username must not be empty".to_string());
        }
        if self.password.is_empty() {
            return Err("password must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Listing of registered usernames. Password hashes are never part of
/// this response.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub usuarios: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub db: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_in_validation() {
        let ok = UserIn {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_user = UserIn {
            username: "   ".to_string(),
            password: "pw1".to_string(),
        };
        assert!(no_user.validate().is_err());

        let no_password = UserIn {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_users_response_wire_field() {
        let response = UsersResponse {
            usuarios: vec!["alice".to_string()],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["usuarios"][0], "alice");
    }
}
