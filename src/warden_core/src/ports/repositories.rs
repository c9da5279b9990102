use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::EmailAddress,
    password::PasswordHash,
    role::{Role, RoleId, RoleName},
    session::TokenKind,
    user::{User, UserId},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<User, UserStoreError>;
    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError>;
    /// Users currently holding `role`, paged. Pages start at 1.
    async fn find_by_role(
        &self,
        role: &RoleName,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<User>, UserStoreError>;
    async fn update_password(
        &self,
        user_id: UserId,
        new_hash: PasswordHash,
    ) -> Result<(), UserStoreError>;
}

// RoleStore port trait and errors
#[derive(Debug, Error)]
pub enum RoleStoreError {
    #[error("Role not found")]
    RoleNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for RoleStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::RoleNotFound, Self::RoleNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn find_by_id(&self, role_id: RoleId) -> Result<Role, RoleStoreError>;
    async fn delete(&self, role_id: RoleId) -> Result<(), RoleStoreError>;
}

// UserRoleStore port trait and errors
#[derive(Debug, Error)]
pub enum UserRoleStoreError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait UserRoleStore: Send + Sync {
    async fn role_names_for_user(&self, user_id: UserId)
    -> Result<Vec<RoleName>, UserRoleStoreError>;
    async fn assign(&self, user_id: UserId, role_id: RoleId) -> Result<(), UserRoleStoreError>;
    async fn remove(&self, user_id: UserId, role_id: RoleId) -> Result<(), UserRoleStoreError>;
}

// SessionCache port trait and errors
#[derive(Debug, Error)]
pub enum SessionCacheError {
    #[error("Session cache unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Stores `token` in the user's slot for `kind`, overwriting any
    /// previous value.
    async fn set(
        &self,
        user_id: UserId,
        kind: TokenKind,
        token: &str,
        ttl: Duration,
    ) -> Result<(), SessionCacheError>;
    async fn get(&self, user_id: UserId, kind: TokenKind)
    -> Result<Option<String>, SessionCacheError>;
    async fn remove(&self, user_id: UserId, kind: TokenKind) -> Result<(), SessionCacheError>;
    /// Blacklist entries expire on their own, nothing ever deletes one.
    async fn add_to_blacklist(&self, token: &str, ttl: Duration)
    -> Result<(), SessionCacheError>;
    async fn is_blacklisted(&self, token: &str) -> Result<bool, SessionCacheError>;
}
