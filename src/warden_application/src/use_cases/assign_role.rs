use warden_core::{
    RoleId, RoleStore, UserId, UserRoleStore, UserRoleStoreError, UserStore, UserStoreError,
};

use crate::role_guard::{RoleGuardError, RoleInvariantGuard};

/// Error types for role assignment use case
#[derive(Debug, thiserror::Error)]
pub enum AssignRoleError {
    #[error("User not found")]
    UserNotFound,
    #[error("Role not found")]
    RoleNotFound,
    #[error("Role is already assigned to this user")]
    AlreadyAssigned,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("User role store error: {0}")]
    UserRoleStoreError(#[from] UserRoleStoreError),
    #[error("Role guard error: {0}")]
    RoleGuardError(RoleGuardError),
}

impl From<RoleGuardError> for AssignRoleError {
    fn from(e: RoleGuardError) -> Self {
        match e {
            RoleGuardError::RoleNotFound => Self::RoleNotFound,
            RoleGuardError::AlreadyAssigned => Self::AlreadyAssigned,
            other => Self::RoleGuardError(other),
        }
    }
}

/// Role assignment use case - grants a role to a user once both exist
/// and the pair is new
pub struct AssignRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    user_store: U,
    role_guard: RoleInvariantGuard<U, R, UR>,
    user_role_store: UR,
}

impl<U, R, UR> AssignRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    pub fn new(
        user_store: U,
        role_guard: RoleInvariantGuard<U, R, UR>,
        user_role_store: UR,
    ) -> Self {
        Self {
            user_store,
            role_guard,
            user_role_store,
        }
    }

    #[tracing::instrument(name = "AssignRoleUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId, role_id: RoleId) -> Result<(), AssignRoleError> {
        match self.user_store.find_by_id(user_id).await {
            Ok(_) => {}
            Err(UserStoreError::UserNotFound) => return Err(AssignRoleError::UserNotFound),
            Err(e) => return Err(AssignRoleError::UserStoreError(e)),
        }

        let role = self
            .role_guard
            .ensure_not_already_assigned(user_id, role_id)
            .await?;

        self.user_role_store.assign(user_id, role_id).await?;

        tracing::info!(%user_id, role = %role.name, "Role assigned");

        Ok(())
    }
}
