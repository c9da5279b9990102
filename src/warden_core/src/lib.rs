pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{EmailAddress, EmailAddressError},
    password::{Password, PasswordError, PasswordHash},
    role::{Role, RoleId, RoleName, RoleNameError},
    session::{BLACKLIST_VALUE, RESET_TOKEN_TTL, TokenKind, blacklist_key, token_key},
    user::{DepartmentId, User, UserId},
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{
        RoleStore, RoleStoreError, SessionCache, SessionCacheError, UserRoleStore,
        UserRoleStoreError, UserStore, UserStoreError,
    },
    services::{PasswordVerifier, PasswordVerifierError, TokenIssuer, TokenIssuerError},
};
