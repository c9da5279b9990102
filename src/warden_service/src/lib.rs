pub mod auth_service;
pub mod error;
pub mod helpers;

// Re-export for convenience
pub use auth_service::AuthService;
pub use error::AuthError;
pub use helpers::{configure_redis, get_redis_client, init_tracing};
