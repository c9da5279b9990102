use warden_core::{
    Role, RoleId, RoleName, RoleStore, RoleStoreError, UserId, UserRoleStore, UserRoleStoreError,
    UserStore, UserStoreError,
};

/// Page the admin-count check asks the directory for. One page is all
/// it ever reads.
const ADMIN_PAGE: u32 = 1;
const ADMIN_PAGE_SIZE: u32 = 100;

/// Error types for the role invariant checks
#[derive(Debug, thiserror::Error)]
pub enum RoleGuardError {
    #[error("Role not found")]
    RoleNotFound,
    #[error("Role is already assigned to this user")]
    AlreadyAssigned,
    #[error("The base role cannot be removed from a user")]
    BaseRoleImmutable,
    #[error("Cannot remove the admin role from the last administrator")]
    LastAdminProtected,
    #[error("Built-in roles cannot be deleted")]
    BuiltInRoleProtected,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("User role store error: {0}")]
    UserRoleStoreError(#[from] UserRoleStoreError),
    #[error("Role store error: {0}")]
    RoleStoreError(String),
}

impl From<RoleStoreError> for RoleGuardError {
    fn from(e: RoleStoreError) -> Self {
        match e {
            RoleStoreError::RoleNotFound => Self::RoleNotFound,
            RoleStoreError::UnexpectedError(e) => Self::RoleStoreError(e),
        }
    }
}

/// Pre-flight checks that keep role administration out of inconsistent
/// states: no duplicate assignments, the base role stays on every
/// user, the last administrator keeps the admin role, and built-in
/// roles survive deletion attempts.
pub struct RoleInvariantGuard<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    user_store: U,
    role_store: R,
    user_role_store: UR,
}

impl<U, R, UR> RoleInvariantGuard<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    pub fn new(user_store: U, role_store: R, user_role_store: UR) -> Self {
        Self {
            user_store,
            role_store,
            user_role_store,
        }
    }

    #[tracing::instrument(name = "RoleInvariantGuard::ensure_role_exists", skip(self))]
    pub async fn ensure_role_exists(&self, role_id: RoleId) -> Result<Role, RoleGuardError> {
        Ok(self.role_store.find_by_id(role_id).await?)
    }

    /// Duplicate check is exact on the stored name. A role spelled
    /// "admin" and one spelled "Admin" count as different assignments.
    #[tracing::instrument(name = "RoleInvariantGuard::ensure_not_already_assigned", skip(self))]
    pub async fn ensure_not_already_assigned(
        &self,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<Role, RoleGuardError> {
        let role = self.ensure_role_exists(role_id).await?;

        let assigned = self.user_role_store.role_names_for_user(user_id).await?;
        if assigned.contains(&role.name) {
            return Err(RoleGuardError::AlreadyAssigned);
        }

        Ok(role)
    }

    /// The base role never comes off, and the admin role stays on the
    /// last administrator. Everything else is removable.
    #[tracing::instrument(name = "RoleInvariantGuard::ensure_removable", skip(self))]
    pub async fn ensure_removable(
        &self,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), RoleGuardError> {
        let role = self.ensure_role_exists(role_id).await?;

        if role.name.is_base() {
            return Err(RoleGuardError::BaseRoleImmutable);
        }

        if role.name.is_admin() {
            let admins = self
                .user_store
                .find_by_role(&role.name, ADMIN_PAGE, ADMIN_PAGE_SIZE)
                .await?;
            // Read-then-decide: two admins dropping each other at the
            // same time can still race past this.
            if admins.len() == 1 && admins[0].id == user_id {
                tracing::warn!(%user_id, "Refusing to remove the last administrator");
                return Err(RoleGuardError::LastAdminProtected);
            }
        }

        Ok(())
    }

    #[tracing::instrument(name = "RoleInvariantGuard::ensure_deletable", skip(self))]
    pub async fn ensure_deletable(&self, role_id: RoleId) -> Result<(), RoleGuardError> {
        let role = self.ensure_role_exists(role_id).await?;

        if role.name.is_built_in() {
            return Err(RoleGuardError::BuiltInRoleProtected);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use warden_core::{DepartmentId, EmailAddress, PasswordHash, User, Username};

    fn user(id: i64, name: &str) -> User {
        User::new(
            UserId(id),
            Username::parse(name).unwrap(),
            EmailAddress::parse(secrecy::Secret::new(format!("{name}@example.com"))).unwrap(),
            PasswordHash::new(secrecy::Secret::new("hash".to_owned())),
            DepartmentId(1),
        )
    }

    #[derive(Clone, Default)]
    struct MockUserStore {
        admins: Vec<User>,
    }

    #[async_trait::async_trait]
    impl UserStore for MockUserStore {
        async fn find_by_id(&self, _user_id: UserId) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_username(&self, _username: &Username) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_email(&self, _email: &EmailAddress) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_role(
            &self,
            role: &RoleName,
            _page: u32,
            _page_size: u32,
        ) -> Result<Vec<User>, UserStoreError> {
            assert!(role.is_admin());
            Ok(self.admins.clone())
        }

        async fn update_password(
            &self,
            _user_id: UserId,
            _new_hash: PasswordHash,
        ) -> Result<(), UserStoreError> {
            unimplemented!()
        }
    }

    #[derive(Clone, Default)]
    struct MockRoleStore {
        roles: Arc<RwLock<HashMap<RoleId, Role>>>,
    }

    impl MockRoleStore {
        async fn insert(&self, role: Role) {
            self.roles.write().await.insert(role.id, role);
        }
    }

    #[async_trait::async_trait]
    impl RoleStore for MockRoleStore {
        async fn find_by_id(&self, role_id: RoleId) -> Result<Role, RoleStoreError> {
            self.roles
                .read()
                .await
                .get(&role_id)
                .cloned()
                .ok_or(RoleStoreError::RoleNotFound)
        }

        async fn delete(&self, role_id: RoleId) -> Result<(), RoleStoreError> {
            self.roles
                .write()
                .await
                .remove(&role_id)
                .map(|_| ())
                .ok_or(RoleStoreError::RoleNotFound)
        }
    }

    #[derive(Clone, Default)]
    struct MockUserRoleStore {
        assigned: Vec<RoleName>,
    }

    #[async_trait::async_trait]
    impl UserRoleStore for MockUserRoleStore {
        async fn role_names_for_user(
            &self,
            _user_id: UserId,
        ) -> Result<Vec<RoleName>, UserRoleStoreError> {
            Ok(self.assigned.clone())
        }

        async fn assign(
            &self,
            _user_id: UserId,
            _role_id: RoleId,
        ) -> Result<(), UserRoleStoreError> {
            unimplemented!()
        }

        async fn remove(
            &self,
            _user_id: UserId,
            _role_id: RoleId,
        ) -> Result<(), UserRoleStoreError> {
            unimplemented!()
        }
    }

    fn guard(
        admins: Vec<User>,
        assigned: Vec<RoleName>,
    ) -> (
        RoleInvariantGuard<MockUserStore, MockRoleStore, MockUserRoleStore>,
        MockRoleStore,
    ) {
        let role_store = MockRoleStore::default();
        let guard = RoleInvariantGuard::new(
            MockUserStore { admins },
            role_store.clone(),
            MockUserRoleStore { assigned },
        );
        (guard, role_store)
    }

    #[tokio::test]
    async fn test_missing_role_is_reported() {
        let (guard, _) = guard(vec![], vec![]);
        let result = guard.ensure_role_exists(RoleId(9)).await;
        assert!(matches!(result, Err(RoleGuardError::RoleNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_assignment_is_rejected() {
        let (guard, roles) = guard(vec![], vec![RoleName::new("Auditor").unwrap()]);
        roles
            .insert(Role::new(
                RoleId(3),
                RoleName::new("Auditor").unwrap(),
                "read-only access",
            ))
            .await;

        let result = guard.ensure_not_already_assigned(UserId(1), RoleId(3)).await;
        assert!(matches!(result, Err(RoleGuardError::AlreadyAssigned)));
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_sensitive() {
        let (guard, roles) = guard(vec![], vec![RoleName::new("auditor").unwrap()]);
        roles
            .insert(Role::new(
                RoleId(3),
                RoleName::new("Auditor").unwrap(),
                "read-only access",
            ))
            .await;

        let result = guard.ensure_not_already_assigned(UserId(1), RoleId(3)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_base_role_cannot_be_removed() {
        let (guard, roles) = guard(vec![], vec![]);
        roles
            .insert(Role::new(RoleId(2), RoleName::new("user").unwrap(), "base"))
            .await;

        let result = guard.ensure_removable(UserId(1), RoleId(2)).await;
        assert!(matches!(result, Err(RoleGuardError::BaseRoleImmutable)));
    }

    #[tokio::test]
    async fn test_last_admin_keeps_the_role() {
        let (guard, roles) = guard(vec![user(7, "only.admin")], vec![]);
        roles
            .insert(Role::new(RoleId(1), RoleName::ADMIN, "admin"))
            .await;

        let result = guard.ensure_removable(UserId(7), RoleId(1)).await;
        assert!(matches!(result, Err(RoleGuardError::LastAdminProtected)));
    }

    #[tokio::test]
    async fn test_admin_role_removable_while_others_remain() {
        let (guard, roles) = guard(vec![user(7, "one"), user(8, "two")], vec![]);
        roles
            .insert(Role::new(RoleId(1), RoleName::ADMIN, "admin"))
            .await;

        let result = guard.ensure_removable(UserId(7), RoleId(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sole_admin_check_is_per_user() {
        // One admin left, but the removal targets someone else.
        let (guard, roles) = guard(vec![user(7, "only.admin")], vec![]);
        roles
            .insert(Role::new(RoleId(1), RoleName::ADMIN, "admin"))
            .await;

        let result = guard.ensure_removable(UserId(8), RoleId(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_built_in_roles_cannot_be_deleted() {
        let (guard, roles) = guard(vec![], vec![]);
        roles
            .insert(Role::new(RoleId(1), RoleName::new("ADMIN").unwrap(), "admin"))
            .await;
        roles
            .insert(Role::new(RoleId(2), RoleName::USER, "base"))
            .await;
        roles
            .insert(Role::new(RoleId(3), RoleName::new("Auditor").unwrap(), ""))
            .await;

        assert!(matches!(
            guard.ensure_deletable(RoleId(1)).await,
            Err(RoleGuardError::BuiltInRoleProtected)
        ));
        assert!(matches!(
            guard.ensure_deletable(RoleId(2)).await,
            Err(RoleGuardError::BuiltInRoleProtected)
        ));
        assert!(guard.ensure_deletable(RoleId(3)).await.is_ok());
    }
}
