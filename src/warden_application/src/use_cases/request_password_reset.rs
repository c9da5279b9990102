use warden_core::{
    EmailAddress, RESET_TOKEN_TTL, SessionCache, SessionCacheError, TokenIssuer, TokenIssuerError,
    TokenKind, UserStore, UserStoreError,
};

/// Error types for password reset request use case
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("User not found")]
    UserNotFound,
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Session cache error: {0}")]
    SessionCacheError(#[from] SessionCacheError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Password reset request use case - issues a short-lived reset token
/// and caches it as the user's single pending reset. Delivering the
/// token to the user is the caller's job.
pub struct RequestPasswordResetUseCase<U, T, C>
where
    U: UserStore,
    T: TokenIssuer,
    C: SessionCache,
{
    user_store: U,
    token_issuer: T,
    session_cache: C,
}

impl<U, T, C> RequestPasswordResetUseCase<U, T, C>
where
    U: UserStore,
    T: TokenIssuer,
    C: SessionCache,
{
    pub fn new(user_store: U, token_issuer: T, session_cache: C) -> Self {
        Self {
            user_store,
            token_issuer,
            session_cache,
        }
    }

    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip(self))]
    pub async fn execute(&self, email: EmailAddress) -> Result<String, RequestPasswordResetError> {
        let user = match self.user_store.find_by_email(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                return Err(RequestPasswordResetError::UserNotFound);
            }
            Err(e) => return Err(RequestPasswordResetError::UserStoreError(e)),
        };

        let token = self.token_issuer.issue_reset_token(&email)?;

        // A repeat request overwrites the previous pending token.
        self.session_cache
            .set(user.id, TokenKind::Reset, &token, RESET_TOKEN_TTL)
            .await?;

        tracing::info!(user_id = %user.id, "Password reset token issued");

        Ok(token)
    }
}
