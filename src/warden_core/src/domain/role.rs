use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(pub i64);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RoleNameError {
    #[error("Role name cannot be empty")]
    Empty,
}

/// Role name. Equality is exact; only the reserved-name checks below
/// ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(Cow<'static, str>);

impl RoleName {
    /// Base role every account holds for its lifetime.
    pub const USER: RoleName = RoleName(Cow::Borrowed("User"));
    /// Privileged role. The last holder can never lose it.
    pub const ADMIN: RoleName = RoleName(Cow::Borrowed("Admin"));

    pub fn new(name: impl Into<String>) -> Result<Self, RoleNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoleNameError::Empty);
        }
        Ok(Self(Cow::Owned(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_admin(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::ADMIN.as_str())
    }

    pub fn is_base(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::USER.as_str())
    }

    pub fn is_built_in(&self) -> bool {
        self.is_admin() || self.is_base()
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
    pub description: String,
    pub active: bool,
}

impl Role {
    pub fn new(id: RoleId, name: RoleName, description: impl Into<String>) -> Self {
        Self {
            id,
            name,
            description: description.into(),
            active: true,
        }
    }
}
