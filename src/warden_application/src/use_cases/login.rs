use std::time::Duration;

use warden_core::{
    Password, PasswordVerifier, PasswordVerifierError, SessionCache, SessionCacheError,
    TokenIssuer, TokenIssuerError, TokenKind, UserStore, UserStoreError, Username,
};

/// Error types for login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password both surface as this
    /// variant, with the same message.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Session cache error: {0}")]
    SessionCacheError(#[from] SessionCacheError),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password verifier error: {0}")]
    PasswordVerifierError(PasswordVerifierError),
}

/// Login use case - verifies credentials, issues a bearer token and
/// records it as the user's single live session
pub struct LoginUseCase<U, P, T, C>
where
    U: UserStore,
    P: PasswordVerifier,
    T: TokenIssuer,
    C: SessionCache,
{
    user_store: U,
    password_verifier: P,
    token_issuer: T,
    session_cache: C,
    token_ttl: Duration,
}

impl<U, P, T, C> LoginUseCase<U, P, T, C>
where
    U: UserStore,
    P: PasswordVerifier,
    T: TokenIssuer,
    C: SessionCache,
{
    pub fn new(
        user_store: U,
        password_verifier: P,
        token_issuer: T,
        session_cache: C,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_store,
            password_verifier,
            token_issuer,
            session_cache,
            token_ttl,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - login handle
    /// * `password` - raw password candidate
    ///
    /// # Returns
    /// The signed bearer token on success
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<String, LoginError> {
        let user = match self.user_store.find_by_username(&username).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                tracing::warn!("Login failed: invalid credentials");
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };

        match self
            .password_verifier
            .verify(&password, &user.password_hash)
            .await
        {
            Ok(()) => {}
            Err(PasswordVerifierError::IncorrectPassword) => {
                tracing::warn!("Login failed: invalid credentials");
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::PasswordVerifierError(e)),
        }

        let token = self.token_issuer.issue_login_token(&user)?;

        // One live session per user, a fresh login displaces the old one.
        self.session_cache
            .set(user.id, TokenKind::Login, &token, self.token_ttl)
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }
}
