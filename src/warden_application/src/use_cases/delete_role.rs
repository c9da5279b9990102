use warden_core::{RoleId, RoleStore, RoleStoreError, UserRoleStore, UserStore};

use crate::role_guard::{RoleGuardError, RoleInvariantGuard};

/// Error types for role deletion use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteRoleError {
    #[error("Role not found")]
    RoleNotFound,
    #[error("Built-in roles cannot be deleted")]
    BuiltInRoleProtected,
    #[error("Role store error: {0}")]
    RoleStoreError(RoleStoreError),
    #[error("Role guard error: {0}")]
    RoleGuardError(RoleGuardError),
}

impl From<RoleGuardError> for DeleteRoleError {
    fn from(e: RoleGuardError) -> Self {
        match e {
            RoleGuardError::RoleNotFound => Self::RoleNotFound,
            RoleGuardError::BuiltInRoleProtected => Self::BuiltInRoleProtected,
            other => Self::RoleGuardError(other),
        }
    }
}

/// Role deletion use case - deletes a role definition unless it is one
/// of the built-ins
pub struct DeleteRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    role_guard: RoleInvariantGuard<U, R, UR>,
    role_store: R,
}

impl<U, R, UR> DeleteRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    pub fn new(role_guard: RoleInvariantGuard<U, R, UR>, role_store: R) -> Self {
        Self {
            role_guard,
            role_store,
        }
    }

    #[tracing::instrument(name = "DeleteRoleUseCase::execute", skip(self))]
    pub async fn execute(&self, role_id: RoleId) -> Result<(), DeleteRoleError> {
        self.role_guard.ensure_deletable(role_id).await?;

        match self.role_store.delete(role_id).await {
            Ok(()) => {}
            Err(RoleStoreError::RoleNotFound) => return Err(DeleteRoleError::RoleNotFound),
            Err(e) => return Err(DeleteRoleError::RoleStoreError(e)),
        }

        tracing::info!(%role_id, "Role deleted");

        Ok(())
    }
}
