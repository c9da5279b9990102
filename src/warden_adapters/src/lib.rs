pub mod config;
pub mod password;
pub mod persistence;
pub mod token;

// Re-export for convenience
pub use config::settings::{JwtSettings, RedisSettings, Settings};
pub use password::argon2_verifier::Argon2PasswordVerifier;
pub use persistence::in_memory_directory::InMemoryDirectory;
pub use persistence::in_memory_session_cache::InMemorySessionCache;
pub use persistence::redis_session_cache::RedisSessionCache;
pub use token::jwt_issuer::{JwtTokenIssuer, LoginClaims, ResetClaims};
