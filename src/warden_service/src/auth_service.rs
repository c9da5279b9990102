use std::time::Duration;

use warden_application::{
    AssignRoleUseCase, DeleteRoleUseCase, LoginUseCase, LogoutUseCase, RemoveRoleUseCase,
    RequestPasswordResetUseCase, ResetPasswordUseCase, RoleInvariantGuard,
};
use warden_core::{
    EmailAddress, Password, PasswordVerifier, RoleId, RoleStore, SessionCache, TokenIssuer,
    UserId, UserRoleStore, UserStore, Username,
};

use crate::error::AuthError;

/// Main authentication service. Wires the stores, the hasher, the
/// token issuer and the session cache into the use cases and exposes
/// them as one API.
pub struct AuthService<U, R, UR, P, T, C>
where
    U: UserStore + Clone,
    R: RoleStore + Clone,
    UR: UserRoleStore + Clone,
    P: PasswordVerifier + Clone,
    T: TokenIssuer + Clone,
    C: SessionCache + Clone,
{
    user_store: U,
    role_store: R,
    user_role_store: UR,
    password_verifier: P,
    token_issuer: T,
    session_cache: C,
    token_ttl: Duration,
}

impl<U, R, UR, P, T, C> AuthService<U, R, UR, P, T, C>
where
    U: UserStore + Clone,
    R: RoleStore + Clone,
    UR: UserRoleStore + Clone,
    P: PasswordVerifier + Clone,
    T: TokenIssuer + Clone,
    C: SessionCache + Clone,
{
    /// Create a new AuthService from its collaborators
    ///
    /// # Arguments
    /// * `user_store` - User lookups and password writes (must be Clone)
    /// * `role_store` - Role definitions (must be Clone)
    /// * `user_role_store` - The user-role assignment table (must be Clone)
    /// * `password_verifier` - Hashes and checks passwords
    /// * `token_issuer` - Signs bearer tokens
    /// * `session_cache` - Live-token slots and the blacklist
    /// * `token_ttl` - Lifetime of a login token; also the blacklist TTL
    ///
    /// # Note on Architecture
    /// Collaborators implement Clone via internal Arc<RwLock> for
    /// thread-safe sharing. Each operation builds its use case from
    /// fresh clones, so the service itself stays stateless.
    pub fn new(
        user_store: U,
        role_store: R,
        user_role_store: UR,
        password_verifier: P,
        token_issuer: T,
        session_cache: C,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_store,
            role_store,
            user_role_store,
            password_verifier,
            token_issuer,
            session_cache,
            token_ttl,
        }
    }

    /// Verify credentials and start the user's single live session.
    ///
    /// # Returns
    /// The signed bearer token on success
    pub async fn login(&self, username: Username, password: Password) -> Result<String, AuthError> {
        let use_case = LoginUseCase::new(
            self.user_store.clone(),
            self.password_verifier.clone(),
            self.token_issuer.clone(),
            self.session_cache.clone(),
            self.token_ttl,
        );
        Ok(use_case.execute(username, password).await?)
    }

    /// Blacklist the presented token and clear the user's login slot.
    pub async fn logout(&self, email: EmailAddress, token: String) -> Result<(), AuthError> {
        let use_case = LogoutUseCase::new(
            self.user_store.clone(),
            self.session_cache.clone(),
            self.token_ttl,
        );
        Ok(use_case.execute(email, token).await?)
    }

    /// Issue a short-lived password-reset token and record it as the
    /// user's single pending reset. Delivering it is the caller's job.
    pub async fn request_password_reset(&self, email: EmailAddress) -> Result<String, AuthError> {
        let use_case = RequestPasswordResetUseCase::new(
            self.user_store.clone(),
            self.token_issuer.clone(),
            self.session_cache.clone(),
        );
        Ok(use_case.execute(email).await?)
    }

    /// Set a new password if the presented reset token is the pending
    /// one, consuming it.
    pub async fn reset_password(
        &self,
        email: EmailAddress,
        token: String,
        new_password: Password,
    ) -> Result<(), AuthError> {
        let use_case = ResetPasswordUseCase::new(
            self.user_store.clone(),
            self.password_verifier.clone(),
            self.session_cache.clone(),
        );
        Ok(use_case.execute(email, token, new_password).await?)
    }

    /// Grant a role to a user.
    pub async fn assign_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AuthError> {
        let use_case = AssignRoleUseCase::new(
            self.user_store.clone(),
            self.role_guard(),
            self.user_role_store.clone(),
        );
        Ok(use_case.execute(user_id, role_id).await?)
    }

    /// Take a role off a user unless an invariant forbids it.
    pub async fn remove_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AuthError> {
        let use_case = RemoveRoleUseCase::new(self.role_guard(), self.user_role_store.clone());
        Ok(use_case.execute(user_id, role_id).await?)
    }

    /// Delete a role definition unless it is one of the built-ins.
    pub async fn delete_role(&self, role_id: RoleId) -> Result<(), AuthError> {
        let use_case = DeleteRoleUseCase::new(self.role_guard(), self.role_store.clone());
        Ok(use_case.execute(role_id).await?)
    }

    fn role_guard(&self) -> RoleInvariantGuard<U, R, UR> {
        RoleInvariantGuard::new(
            self.user_store.clone(),
            self.role_store.clone(),
            self.user_role_store.clone(),
        )
    }
}
