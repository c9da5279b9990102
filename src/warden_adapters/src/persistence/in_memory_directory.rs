use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use warden_core::{
    EmailAddress, PasswordHash, Role, RoleId, RoleName, RoleStore, RoleStoreError, User, UserId,
    UserRoleStore, UserRoleStoreError, UserStore, UserStoreError, Username,
};

/// HashMap-backed implementation of all three directory stores, used
/// by tests and local development. Role membership is joined at read
/// time so `User::roles` always reflects the assignment table.
#[derive(Default, Clone)]
pub struct InMemoryDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    roles: Arc<RwLock<HashMap<RoleId, Role>>>,
    assignments: Arc<RwLock<Vec<(UserId, RoleId)>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn add_role(&self, role: Role) {
        self.roles.write().await.insert(role.id, role);
    }

    async fn assigned_role_names(&self, user_id: UserId) -> Vec<RoleName> {
        let assignments = self.assignments.read().await;
        let roles = self.roles.read().await;
        assignments
            .iter()
            .filter(|(holder, _)| *holder == user_id)
            .filter_map(|(_, role_id)| roles.get(role_id).map(|role| role.name.clone()))
            .collect()
    }

    async fn hydrate(&self, user: User) -> User {
        let roles = self.assigned_role_names(user.id).await;
        user.with_roles(roles)
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryDirectory {
    async fn find_by_id(&self, user_id: UserId) -> Result<User, UserStoreError> {
        let user = self
            .users
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)?;
        Ok(self.hydrate(user).await)
    }

    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let user = {
            let users = self.users.read().await;
            users
                .values()
                .find(|user| user.username.as_str() == username.as_str())
                .cloned()
        };
        let user = user.ok_or(UserStoreError::UserNotFound)?;
        Ok(self.hydrate(user).await)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, UserStoreError> {
        let user = {
            let users = self.users.read().await;
            users.values().find(|user| user.email == *email).cloned()
        };
        let user = user.ok_or(UserStoreError::UserNotFound)?;
        Ok(self.hydrate(user).await)
    }

    async fn find_by_role(
        &self,
        role: &RoleName,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<User>, UserStoreError> {
        let holder_ids = {
            let assignments = self.assignments.read().await;
            let roles = self.roles.read().await;
            let mut ids: Vec<UserId> = assignments
                .iter()
                .filter(|(_, role_id)| roles.get(role_id).is_some_and(|r| r.name == *role))
                .map(|(holder, _)| *holder)
                .collect();
            ids.sort_by_key(|id| id.0);
            ids.dedup();
            ids
        };

        let offset = page.saturating_sub(1) as usize * page_size as usize;
        let mut holders = Vec::new();
        for user_id in holder_ids.into_iter().skip(offset).take(page_size as usize) {
            let user = self.users.read().await.get(&user_id).cloned();
            if let Some(user) = user {
                holders.push(self.hydrate(user).await);
            }
        }
        Ok(holders)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or(UserStoreError::UserNotFound)?;
        user.password_hash = new_hash;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RoleStore for InMemoryDirectory {
    async fn find_by_id(&self, role_id: RoleId) -> Result<Role, RoleStoreError> {
        self.roles
            .read()
            .await
            .get(&role_id)
            .cloned()
            .ok_or(RoleStoreError::RoleNotFound)
    }

    async fn delete(&self, role_id: RoleId) -> Result<(), RoleStoreError> {
        if self.roles.write().await.remove(&role_id).is_none() {
            return Err(RoleStoreError::RoleNotFound);
        }
        // Assignments cascade with the role.
        self.assignments
            .write()
            .await
            .retain(|(_, assigned)| *assigned != role_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRoleStore for InMemoryDirectory {
    async fn role_names_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<RoleName>, UserRoleStoreError> {
        Ok(self.assigned_role_names(user_id).await)
    }

    async fn assign(&self, user_id: UserId, role_id: RoleId) -> Result<(), UserRoleStoreError> {
        let mut assignments = self.assignments.write().await;
        if assignments.contains(&(user_id, role_id)) {
            return Err(UserRoleStoreError::UnexpectedError(
                "assignment already exists".to_string(),
            ));
        }
        assignments.push((user_id, role_id));
        Ok(())
    }

    async fn remove(&self, user_id: UserId, role_id: RoleId) -> Result<(), UserRoleStoreError> {
        let mut assignments = self.assignments.write().await;
        let before = assignments.len();
        assignments.retain(|assignment| *assignment != (user_id, role_id));
        if assignments.len() == before {
            return Err(UserRoleStoreError::UnexpectedError(
                "assignment does not exist".to_string(),
            ));
        }
        Ok(())
    }
}
