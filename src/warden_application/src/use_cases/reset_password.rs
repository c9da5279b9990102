use warden_core::{
    EmailAddress, Password, PasswordVerifier, PasswordVerifierError, SessionCache,
    SessionCacheError, TokenKind, UserStore, UserStoreError,
};

use crate::token_validator::TokenValidator;

/// Error types for password reset confirmation use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password verifier error: {0}")]
    PasswordVerifierError(#[from] PasswordVerifierError),
    #[error("Session cache error: {0}")]
    SessionCacheError(#[from] SessionCacheError),
}

/// Password reset confirmation use case - checks the presented reset
/// token against the cached one, stores the new hash and consumes the
/// token
pub struct ResetPasswordUseCase<U, P, C>
where
    U: UserStore,
    P: PasswordVerifier,
    C: SessionCache + Clone,
{
    user_store: U,
    password_verifier: P,
    session_cache: C,
}

impl<U, P, C> ResetPasswordUseCase<U, P, C>
where
    U: UserStore,
    P: PasswordVerifier,
    C: SessionCache + Clone,
{
    pub fn new(user_store: U, password_verifier: P, session_cache: C) -> Self {
        Self {
            user_store,
            password_verifier,
            session_cache,
        }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, token, new_password))]
    pub async fn execute(
        &self,
        email: EmailAddress,
        token: String,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(ResetPasswordError::UserNotFound),
            Err(e) => return Err(ResetPasswordError::UserStoreError(e)),
        };

        let valid = TokenValidator::new(self.session_cache.clone())
            .validate(&token, user.id, TokenKind::Reset)
            .await?;
        if !valid {
            tracing::warn!(user_id = %user.id, "Password reset rejected: token not recognized");
            return Err(ResetPasswordError::InvalidToken);
        }

        let new_hash = self.password_verifier.hash(&new_password).await?;
        match self.user_store.update_password(user.id, new_hash).await {
            Ok(()) => {}
            Err(UserStoreError::UserNotFound) => return Err(ResetPasswordError::UserNotFound),
            Err(e) => return Err(ResetPasswordError::UserStoreError(e)),
        }

        // Reset tokens are single-use.
        self.session_cache.remove(user.id, TokenKind::Reset).await?;

        tracing::info!(user_id = %user.id, "Password reset completed");

        Ok(())
    }
}
