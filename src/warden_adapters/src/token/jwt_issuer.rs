use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use secrecy::{ExposeSecret, Secret};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use warden_core::{EmailAddress, TokenIssuer, TokenIssuerError, User};

use crate::config::settings::JwtSettings;

/// `tokenType` claim value that marks a token as a password-reset
/// token.
pub const RESET_TOKEN_TYPE: &str = "ResetPassword";

/// Claims embedded in a login token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginClaims {
    pub sub: String,
    pub name: String,
    pub role: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
}

/// Claims embedded in a password-reset token.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetClaims {
    pub email: Secret<String>,
    #[serde(rename = "tokenType")]
    pub token_type: String,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
}

impl Serialize for ResetClaims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ResetClaims", 5)?;
        state.serialize_field("email", self.email.expose_secret())?;
        state.serialize_field("tokenType", &self.token_type)?;
        state.serialize_field("iss", &self.iss)?;
        state.serialize_field("aud", &self.aud)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}

/// Issues HMAC-SHA256 signed JWTs from the configured signing key.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtSettings,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtSettings) -> Self {
        Self { config }
    }

    fn encoding_key(&self) -> Result<EncodingKey, TokenIssuerError> {
        let secret = self.config.secret_key.expose_secret();
        if secret.is_empty() {
            return Err(TokenIssuerError::Signing(
                "JWT signing key is not configured".to_string(),
            ));
        }
        Ok(EncodingKey::from_secret(secret.as_bytes()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_login_token(&self, user: &User) -> Result<String, TokenIssuerError> {
        let exp = expiry_timestamp(self.config.expire_minutes as i64 * 60)?;
        let claims = LoginClaims {
            sub: user.id.to_string(),
            name: user.username.as_str().to_owned(),
            role: user.roles.iter().map(|role| role.as_str().to_owned()).collect(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key()?)
            .map_err(|e| TokenIssuerError::Signing(e.to_string()))
    }

    fn issue_reset_token(&self, email: &EmailAddress) -> Result<String, TokenIssuerError> {
        let exp = expiry_timestamp(warden_core::RESET_TOKEN_TTL.as_secs() as i64)?;
        let claims = ResetClaims {
            email: Clone::clone(email.as_ref()),
            token_type: RESET_TOKEN_TYPE.to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key()?)
            .map_err(|e| TokenIssuerError::Signing(e.to_string()))
    }
}

fn expiry_timestamp(ttl_seconds: i64) -> Result<usize, TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or_else(|| {
        TokenIssuerError::UnexpectedError("Failed to create token duration".to_string())
    })?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or_else(|| {
            TokenIssuerError::UnexpectedError("Token expiry out of range".to_string())
        })?
        .timestamp();

    exp.try_into()
        .map_err(|_| TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}
