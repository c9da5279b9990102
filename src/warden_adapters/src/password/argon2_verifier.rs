use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use warden_core::{Password, PasswordVerifierError};

/// Argon2id hasher and verifier. The expensive work runs on the
/// blocking pool with the current span attached.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordVerifier;

impl Argon2PasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl warden_core::PasswordVerifier for Argon2PasswordVerifier {
    async fn verify(
        &self,
        candidate: &Password,
        hash: &warden_core::PasswordHash,
    ) -> Result<(), PasswordVerifierError> {
        verify_password_hash(hash.clone(), candidate.clone())
            .await
            .map_err(|_| PasswordVerifierError::IncorrectPassword)
    }

    async fn hash(
        &self,
        password: &Password,
    ) -> Result<warden_core::PasswordHash, PasswordVerifierError> {
        compute_password_hash(password.clone())
            .await
            .map(warden_core::PasswordHash::new)
            .map_err(PasswordVerifierError::UnexpectedError)
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: warden_core::PasswordHash,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.as_ref().expose_secret())
                    .map_err(|e| e.to_string())?;

            Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            )
            .verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            )
            .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
