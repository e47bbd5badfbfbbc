use crate::error::ServiceError;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

/// One stored credential. The password hash is opaque and never leaves
/// the authentication services.
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// The user store backing both authentication services. Uniqueness of
/// `username` is enforced by the store itself, so a concurrent
/// check-then-insert race always resolves to exactly one winner.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new credential. Fails with `ServiceError::UserExists`
    /// when the username is already taken.
    async fn insert(&self, username: &str, password_hash: &str) -> Result<Uuid, ServiceError>;

    async fn find(&self, username: &str) -> Result<Option<UserCredential>, ServiceError>;

    /// All registered usernames, sorted. Hashes are never returned.
    async fn list_usernames(&self) -> Result<Vec<String>, ServiceError>;

    /// Cheap reachability check for health endpoints.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create the connection pool. Called once during process startup;
    /// the pool is then threaded explicitly into every handler.
    pub async fn connect(database_url: &str) -> Result<Self, ServiceError> {
        info!("Connecting to user store: {}", database_url);

        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await?;

        info!("User store connection pool created successfully");

        Ok(Self { pool })
    }

    /// Ensure the users table and its uniqueness constraint exist.
    pub async fn migrate(&self) -> Result<(), ServiceError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<Uuid, ServiceError> {
        let id = Uuid::new_v4();

        let result = sqlx::query("INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(ServiceError::UserExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, username: &str) -> Result<Option<UserCredential>, ServiceError> {
        let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| UserCredential {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
        }))
    }

    async fn list_usernames(&self) -> Result<Vec<String>, ServiceError> {
        let usernames = sqlx::query_scalar("SELECT username FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        Ok(usernames)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("User store health check failed: {}", e);
                Err(e.into())
            }
        }
    }
}

/// In-memory store used by handler tests and for running a service
/// without a database during local development.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, UserCredential>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, username: &str, password_hash: &str) -> Result<Uuid, ServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(username) {
            return Err(ServiceError::UserExists);
        }

        let id = Uuid::new_v4();
        users.insert(
            username.to_string(),
            UserCredential {
                id,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(id)
    }

    async fn find(&self, username: &str) -> Result<Option<UserCredential>, ServiceError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(username).cloned())
    }

    async fn list_usernames(&self) -> Result<Vec<String>, ServiceError> {
        let users = self.users.lock().unwrap();
        let mut usernames: Vec<String> = users.keys().cloned().collect();
        usernames.sort();
        Ok(usernames)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_enforces_uniqueness() {
        let store = MemoryUserStore::new();

        let id = store.insert("alice", "hash-1").await.unwrap();
        let err = store.insert("alice", "hash-2").await.unwrap_err();
        assert!(matches!(err, ServiceError::UserExists));

        // The losing insert must not alter the stored credential.
        let stored = store.find("alice").await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.password_hash, "hash-1");
    }

    #[tokio::test]
    async fn test_memory_store_find_missing() {
        let store = MemoryUserStore::new();
        assert!(store.find("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_listing_is_sorted_and_hash_free() {
        let store = MemoryUserStore::new();
        store.insert("carol", "hash-c").await.unwrap();
        store.insert("alice", "hash-a").await.unwrap();

        let usernames = store.list_usernames().await.unwrap();
        assert_eq!(usernames, vec!["alice", "carol"]);
    }
}
