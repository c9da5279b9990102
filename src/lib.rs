//! # Warden - Authentication and Session Library
//!
//! This is a facade crate that re-exports all public APIs from the warden service components.
//! Use this crate to get access to all authentication and role management functionality in one
//! place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `EmailAddress`, `Password`, `User`, `Role`, etc.
//! - **Repository traits**: `UserStore`, `RoleStore`, `UserRoleStore`, `SessionCache`
//! - **Use cases**: `LoginUseCase`, `LogoutUseCase`, `AssignRoleUseCase`, etc.
//! - **Adapters**: `RedisSessionCache`, `JwtTokenIssuer`, `Argon2PasswordVerifier`, etc.
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

// Re-export most commonly used core types at the root level
pub use warden_core::{
    DepartmentId, EmailAddress, Password, PasswordHash, Role, RoleId, RoleName, TokenKind, User,
    UserId, Username,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use warden_core::{
        RoleStore, RoleStoreError, SessionCache, SessionCacheError, UserRoleStore,
        UserRoleStoreError, UserStore, UserStoreError,
    };
}

// Re-export repository and service traits at root level
pub use warden_core::{
    PasswordVerifier, PasswordVerifierError, RoleStore, RoleStoreError, SessionCache,
    SessionCacheError, TokenIssuer, TokenIssuerError, UserRoleStore, UserRoleStoreError,
    UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

// Re-export use cases at root level
pub use warden_application::{
    AssignRoleUseCase, DeleteRoleUseCase, LoginUseCase, LogoutUseCase, RemoveRoleUseCase,
    RequestPasswordResetUseCase, ResetPasswordUseCase, RoleInvariantGuard, TokenValidator,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Token issuing
    pub mod token {
        pub use warden_adapters::token::*;
    }

    /// Password hashing
    pub mod password {
        pub use warden_adapters::password::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use warden_adapters::{
    Argon2PasswordVerifier, InMemoryDirectory, InMemorySessionCache, JwtTokenIssuer,
    RedisSessionCache, Settings,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use warden_service::{AuthError, AuthService, configure_redis, get_redis_client, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use tokio;
