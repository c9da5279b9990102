use warden_core::{SessionCache, SessionCacheError, TokenKind, UserId};

/// Decides whether a presented token is still the live one for a
/// user's slot. Signature and expiry verification belong to the bearer
/// middleware in front of this; a token only reaches here after
/// passing it.
pub struct TokenValidator<C>
where
    C: SessionCache,
{
    session_cache: C,
}

impl<C> TokenValidator<C>
where
    C: SessionCache,
{
    pub fn new(session_cache: C) -> Self {
        Self { session_cache }
    }

    /// `true` only when the token is not blacklisted and matches the
    /// cached value for `kind` byte for byte. An empty or expired slot
    /// means `false`, never an error.
    #[tracing::instrument(name = "TokenValidator::validate", skip(self, token))]
    pub async fn validate(
        &self,
        token: &str,
        user_id: UserId,
        kind: TokenKind,
    ) -> Result<bool, SessionCacheError> {
        if self.session_cache.is_blacklisted(token).await? {
            return Ok(false);
        }

        let cached = self.session_cache.get(user_id, kind).await?;

        Ok(cached.as_deref() == Some(token))
    }
}
