use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EmailAddressError {
    #[error("Email address cannot be empty")]
    Empty,
    #[error("Email address is missing an '@'")]
    MissingAtSign,
}

/// E-mail address used as the lookup key for logout and password-reset
/// flows. Wrapped in `Secret` so it never lands in logs by accident.
/// Comparison is exact, the directory owns any normalization.
#[derive(Debug, Clone)]
pub struct EmailAddress(Secret<String>);

impl EmailAddress {
    pub fn parse(raw: Secret<String>) -> Result<Self, EmailAddressError> {
        let value = raw.expose_secret();
        if value.trim().is_empty() {
            return Err(EmailAddressError::Empty);
        }
        if !value.contains('@') {
            return Err(EmailAddressError::MissingAtSign);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<Secret<String>> for EmailAddress {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
