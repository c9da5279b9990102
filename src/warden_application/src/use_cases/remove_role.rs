use warden_core::{RoleId, RoleStore, UserId, UserRoleStore, UserRoleStoreError, UserStore};

use crate::role_guard::{RoleGuardError, RoleInvariantGuard};

/// Error types for role removal use case
#[derive(Debug, thiserror::Error)]
pub enum RemoveRoleError {
    #[error("Role not found")]
    RoleNotFound,
    #[error("The base role cannot be removed from a user")]
    BaseRoleImmutable,
    #[error("Cannot remove the admin role from the last administrator")]
    LastAdminProtected,
    #[error("User role store error: {0}")]
    UserRoleStoreError(#[from] UserRoleStoreError),
    #[error("Role guard error: {0}")]
    RoleGuardError(RoleGuardError),
}

impl From<RoleGuardError> for RemoveRoleError {
    fn from(e: RoleGuardError) -> Self {
        match e {
            RoleGuardError::RoleNotFound => Self::RoleNotFound,
            RoleGuardError::BaseRoleImmutable => Self::BaseRoleImmutable,
            RoleGuardError::LastAdminProtected => Self::LastAdminProtected,
            other => Self::RoleGuardError(other),
        }
    }
}

/// Role removal use case - takes a role off a user unless an invariant
/// forbids it
pub struct RemoveRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    role_guard: RoleInvariantGuard<U, R, UR>,
    user_role_store: UR,
}

impl<U, R, UR> RemoveRoleUseCase<U, R, UR>
where
    U: UserStore,
    R: RoleStore,
    UR: UserRoleStore,
{
    pub fn new(role_guard: RoleInvariantGuard<U, R, UR>, user_role_store: UR) -> Self {
        Self {
            role_guard,
            user_role_store,
        }
    }

    #[tracing::instrument(name = "RemoveRoleUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId, role_id: RoleId) -> Result<(), RemoveRoleError> {
        self.role_guard.ensure_removable(user_id, role_id).await?;

        self.user_role_store.remove(user_id, role_id).await?;

        tracing::info!(%user_id, %role_id, "Role removed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use warden_core::{
        DepartmentId, EmailAddress, PasswordHash, Role, RoleName, RoleStoreError, User,
        UserRoleStoreError, UserStoreError, Username,
    };

    fn admin(id: i64) -> User {
        User::new(
            UserId(id),
            Username::parse(format!("admin{id}")).unwrap(),
            EmailAddress::try_from(Secret::from(format!("admin{id}@example.com"))).unwrap(),
            PasswordHash::new(Secret::from("hash".to_string())),
            DepartmentId(1),
        )
        .with_roles(vec![RoleName::ADMIN])
    }

    #[derive(Clone, Default)]
    struct MockUserStore {
        admins: Arc<RwLock<Vec<User>>>,
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
            _role: &RoleName,
            _page: u32,
            _page_size: u32,
        ) -> Result<Vec<User>, UserStoreError> {
            Ok(self.admins.read().await.clone())
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

        async fn delete(&self, _role_id: RoleId) -> Result<(), RoleStoreError> {
            unimplemented!()
        }
    }

    #[derive(Clone, Default)]
    struct MockUserRoleStore {
        removed: Arc<RwLock<Vec<(UserId, RoleId)>>>,
    }

    #[async_trait::async_trait]
    impl UserRoleStore for MockUserRoleStore {
        async fn role_names_for_user(
            &self,
            _user_id: UserId,
        ) -> Result<Vec<RoleName>, UserRoleStoreError> {
            unimplemented!()
        }

        async fn assign(
            &self,
            _user_id: UserId,
            _role_id: RoleId,
        ) -> Result<(), UserRoleStoreError> {
            unimplemented!()
        }

        async fn remove(&self, user_id: UserId, role_id: RoleId) -> Result<(), UserRoleStoreError> {
            self.removed.write().await.push((user_id, role_id));
            Ok(())
        }
    }

    struct Fixture {
        user_store: MockUserStore,
        role_store: MockRoleStore,
        user_role_store: MockUserRoleStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                user_store: MockUserStore::default(),
                role_store: MockRoleStore::default(),
                user_role_store: MockUserRoleStore::default(),
            }
        }

        fn use_case(&self) -> RemoveRoleUseCase<MockUserStore, MockRoleStore, MockUserRoleStore> {
            let guard = RoleInvariantGuard::new(
                self.user_store.clone(),
                self.role_store.clone(),
                self.user_role_store.clone(),
            );
            RemoveRoleUseCase::new(guard, self.user_role_store.clone())
        }
    }

    #[tokio::test]
    async fn test_ordinary_role_comes_off() {
        let fixture = Fixture::new();
        fixture.role_store.roles.write().await.insert(
            RoleId(3),
            Role::new(RoleId(3), RoleName::new("Auditor").unwrap(), ""),
        );

        fixture.use_case().execute(UserId(1), RoleId(3)).await.unwrap();

        assert_eq!(
            fixture.user_role_store.removed.read().await.as_slice(),
            &[(UserId(1), RoleId(3))]
        );
    }

    #[tokio::test]
    async fn test_base_role_is_immutable() {
        let fixture = Fixture::new();
        fixture
            .role_store
            .roles
            .write()
            .await
            .insert(RoleId(2), Role::new(RoleId(2), RoleName::USER, "base"));

        let result = fixture.use_case().execute(UserId(1), RoleId(2)).await;

        assert!(matches!(result, Err(RemoveRoleError::BaseRoleImmutable)));
        assert!(fixture.user_role_store.removed.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_last_admin_is_protected() {
        let fixture = Fixture::new();
        fixture
            .role_store
            .roles
            .write()
            .await
            .insert(RoleId(1), Role::new(RoleId(1), RoleName::ADMIN, "admin"));
        fixture.user_store.admins.write().await.push(admin(7));

        let result = fixture.use_case().execute(UserId(7), RoleId(1)).await;

        assert!(matches!(result, Err(RemoveRoleError::LastAdminProtected)));
        assert!(fixture.user_role_store.removed.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_admin_role_comes_off_while_another_admin_remains() {
        let fixture = Fixture::new();
        fixture
            .role_store
            .roles
            .write()
            .await
            .insert(RoleId(1), Role::new(RoleId(1), RoleName::ADMIN, "admin"));
        {
            let mut admins = fixture.user_store.admins.write().await;
            admins.push(admin(7));
            admins.push(admin(8));
        }

        fixture.use_case().execute(UserId(7), RoleId(1)).await.unwrap();

        assert_eq!(
            fixture.user_role_store.removed.read().await.as_slice(),
            &[(UserId(7), RoleId(1))]
        );
    }

    #[tokio::test]
    async fn test_missing_role_is_not_found() {
        let fixture = Fixture::new();

        let result = fixture.use_case().execute(UserId(1), RoleId(9)).await;

        assert!(matches!(result, Err(RemoveRoleError::RoleNotFound)));
    }
}
