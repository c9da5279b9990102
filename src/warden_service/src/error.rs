use thiserror::Error;
use warden_application::{
    AssignRoleError, DeleteRoleError, LoginError, LogoutError, RemoveRoleError,
    RequestPasswordResetError, ResetPasswordError,
};
use warden_core::SessionCacheError;

/// Error taxonomy exposed by [`AuthService`](crate::AuthService). Each
/// use-case error collapses into one of these categories so callers
/// branch on category, not on which use case failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username and wrong password both land here, with the
    /// same message.
    #[error("Invalid username or password")]
    Authentication,
    /// The presented token is not the live one for its slot.
    #[error("Invalid or expired token")]
    Token,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Session cache error: {0}")]
    CacheUnavailable(SessionCacheError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Authentication, Self::Authentication) => true,
            (Self::Token, Self::Token) => true,
            (Self::NotFound(_), Self::NotFound(_)) => true,
            (Self::Conflict(_), Self::Conflict(_)) => true,
            (Self::CacheUnavailable(_), Self::CacheUnavailable(_)) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

const USER_NOT_FOUND: &str = "User not found";
const ROLE_NOT_FOUND: &str = "Role not found";

impl From<LoginError> for AuthError {
    fn from(e: LoginError) -> Self {
        match e {
            LoginError::InvalidCredentials => Self::Authentication,
            LoginError::SessionCacheError(e) => Self::CacheUnavailable(e),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<LogoutError> for AuthError {
    fn from(e: LogoutError) -> Self {
        match e {
            LogoutError::UserNotFound => Self::NotFound(USER_NOT_FOUND),
            LogoutError::InvalidToken => Self::Token,
            LogoutError::SessionCacheError(e) => Self::CacheUnavailable(e),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<RequestPasswordResetError> for AuthError {
    fn from(e: RequestPasswordResetError) -> Self {
        match e {
            RequestPasswordResetError::UserNotFound => Self::NotFound(USER_NOT_FOUND),
            RequestPasswordResetError::SessionCacheError(e) => Self::CacheUnavailable(e),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<ResetPasswordError> for AuthError {
    fn from(e: ResetPasswordError) -> Self {
        match e {
            ResetPasswordError::UserNotFound => Self::NotFound(USER_NOT_FOUND),
            ResetPasswordError::InvalidToken => Self::Token,
            ResetPasswordError::SessionCacheError(e) => Self::CacheUnavailable(e),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<AssignRoleError> for AuthError {
    fn from(e: AssignRoleError) -> Self {
        match e {
            AssignRoleError::UserNotFound => Self::NotFound(USER_NOT_FOUND),
            AssignRoleError::RoleNotFound => Self::NotFound(ROLE_NOT_FOUND),
            AssignRoleError::AlreadyAssigned => {
                Self::Conflict("Role is already assigned to this user")
            }
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<RemoveRoleError> for AuthError {
    fn from(e: RemoveRoleError) -> Self {
        match e {
            RemoveRoleError::RoleNotFound => Self::NotFound(ROLE_NOT_FOUND),
            RemoveRoleError::BaseRoleImmutable => {
                Self::Conflict("The base role cannot be removed from a user")
            }
            RemoveRoleError::LastAdminProtected => {
                Self::Conflict("Cannot remove the admin role from the last administrator")
            }
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<DeleteRoleError> for AuthError {
    fn from(e: DeleteRoleError) -> Self {
        match e {
            DeleteRoleError::RoleNotFound => Self::NotFound(ROLE_NOT_FOUND),
            DeleteRoleError::BuiltInRoleProtected => {
                Self::Conflict("Built-in roles cannot be deleted")
            }
            other => Self::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::TokenIssuerError;

    #[test]
    fn test_credential_failures_collapse_to_authentication() {
        assert_eq!(
            AuthError::from(LoginError::InvalidCredentials),
            AuthError::Authentication
        );
    }

    #[test]
    fn test_cache_failures_keep_their_category() {
        let e = LoginError::SessionCacheError(SessionCacheError::Unavailable("down".to_string()));
        assert!(matches!(AuthError::from(e), AuthError::CacheUnavailable(_)));
    }

    #[test]
    fn test_issuer_failures_are_unexpected() {
        let e = LoginError::TokenIssuerError(TokenIssuerError::Signing("no key".to_string()));
        assert!(matches!(AuthError::from(e), AuthError::Unexpected(_)));
    }

    #[test]
    fn test_guard_violations_are_conflicts() {
        assert!(matches!(
            AuthError::from(RemoveRoleError::LastAdminProtected),
            AuthError::Conflict(_)
        ));
        assert!(matches!(
            AuthError::from(DeleteRoleError::BuiltInRoleProtected),
            AuthError::Conflict(_)
        ));
    }
}
