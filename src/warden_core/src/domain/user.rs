use std::fmt;

use super::email::EmailAddress;
use super::password::PasswordHash;
use super::role::RoleName;
use super::username::Username;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartmentId(pub i64);

/// A user the way the directory hands it to the auth core. `roles`
/// comes pre-joined, the same shape the lookup queries return. The
/// `active` flag is carried through but never consulted at login.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub active: bool,
    pub department: DepartmentId,
    pub roles: Vec<RoleName>,
}

impl User {
    pub fn new(
        id: UserId,
        username: Username,
        email: EmailAddress,
        password_hash: PasswordHash,
        department: DepartmentId,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            active: true,
            department,
            roles: Vec::new(),
        }
    }

    pub fn with_roles(mut self, roles: Vec<RoleName>) -> Self {
        self.roles = roles;
        self
    }
}
