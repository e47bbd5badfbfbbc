pub mod config;
pub mod error;
pub mod password;
pub mod store;
pub mod types;

pub use config::{AuthServiceConfig, DomainServiceConfig, GatewayConfig};
pub use error::ServiceError;
pub use store::{MemoryUserStore, PgUserStore, UserCredential, UserStore};
pub use types::{HealthResponse, MessageResponse, RegisterResponse, UserIn, UsersResponse};
