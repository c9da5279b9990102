use std::time::Duration;

use warden_core::{
    EmailAddress, SessionCache, SessionCacheError, TokenKind, UserStore, UserStoreError,
};

use crate::token_validator::TokenValidator;

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Session cache error: {0}")]
    SessionCacheError(#[from] SessionCacheError),
}

/// Logout use case - blacklists the presented token and clears the
/// user's login slot
pub struct LogoutUseCase<U, C>
where
    U: UserStore,
    C: SessionCache + Clone,
{
    user_store: U,
    session_cache: C,
    blacklist_ttl: Duration,
}

impl<U, C> LogoutUseCase<U, C>
where
    U: UserStore,
    C: SessionCache + Clone,
{
    /// `blacklist_ttl` is the full configured login-token window, so a
    /// blacklist entry always outlives the token it blocks.
    pub fn new(user_store: U, session_cache: C, blacklist_ttl: Duration) -> Self {
        Self {
            user_store,
            session_cache,
            blacklist_ttl,
        }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self, token))]
    pub async fn execute(&self, email: EmailAddress, token: String) -> Result<(), LogoutError> {
        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LogoutError::UserNotFound),
            Err(e) => return Err(LogoutError::UserStoreError(e)),
        };

        let valid = TokenValidator::new(self.session_cache.clone())
            .validate(&token, user.id, TokenKind::Login)
            .await?;
        if !valid {
            tracing::warn!(user_id = %user.id, "Logout rejected: token not recognized");
            return Err(LogoutError::InvalidToken);
        }

        // Blacklist first, then drop the slot.
        self.session_cache
            .add_to_blacklist(&token, self.blacklist_ttl)
            .await?;
        self.session_cache.remove(user.id, TokenKind::Login).await?;

        tracing::info!(user_id = %user.id, "User logged out");

        Ok(())
    }
}
