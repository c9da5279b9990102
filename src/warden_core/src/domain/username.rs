use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,
}

/// Login handle. Not secret, it appears in token claims and log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
