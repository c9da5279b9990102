use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::EmailAddress,
    password::{Password, PasswordHash},
    user::User,
};

// PasswordVerifier port trait and errors
#[derive(Debug, Error)]
pub enum PasswordVerifierError {
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for PasswordVerifierError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    async fn verify(
        &self,
        candidate: &Password,
        hash: &PasswordHash,
    ) -> Result<(), PasswordVerifierError>;
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordVerifierError>;
}

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Token signing failed: {0}")]
    Signing(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Signing(_), Self::Signing(_)) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Builds signed bearer tokens. Implementations never touch the
/// session cache.
pub trait TokenIssuer: Send + Sync {
    fn issue_login_token(&self, user: &User) -> Result<String, TokenIssuerError>;
    fn issue_reset_token(&self, email: &EmailAddress) -> Result<String, TokenIssuerError>;
}
