use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE_NAME, ENV_PREFIX, ENV_SEPARATOR, defaults};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub jwt: JwtSettings,
    pub redis: RedisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret_key: Secret<String>,
    pub issuer: String,
    pub audience: String,
    pub expire_minutes: u64,
}

impl JwtSettings {
    /// Lifetime of a login token, as configured.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.expire_minutes * 60)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
    pub response_timeout_in_millis: u64,
}

impl RedisSettings {
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_in_millis)
    }
}

impl Settings {
    /// Loads settings from defaults, then an optional `warden.json`
    /// file, then `WARDEN`-prefixed environment variables. Later
    /// sources override earlier ones.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialized `Settings` if every
    /// source parsed, or a `ConfigError` otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("jwt.secret_key", "")?
            .set_default("jwt.issuer", defaults::JWT_ISSUER)?
            .set_default("jwt.audience", defaults::JWT_AUDIENCE)?
            .set_default("jwt.expire_minutes", defaults::JWT_EXPIRE_MINUTES)?
            .set_default("redis.host_name", defaults::REDIS_HOST_NAME)?
            .set_default(
                "redis.response_timeout_in_millis",
                defaults::REDIS_RESPONSE_TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::Mutex;

    use secrecy::ExposeSecret;

    use super::*;
    use crate::config::constants::env::{JWT_EXPIRE_MINUTES_ENV_VAR, JWT_SECRET_KEY_ENV_VAR};

    // Environment variables are process-wide, so these tests run one
    // at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_apply_without_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();

        let settings = Settings::load().unwrap();

        assert_eq!(settings.jwt.issuer, defaults::JWT_ISSUER);
        assert_eq!(settings.jwt.audience, defaults::JWT_AUDIENCE);
        assert_eq!(settings.jwt.expire_minutes, 60);
        assert_eq!(settings.jwt.token_ttl(), Duration::from_secs(3600));
        assert_eq!(settings.redis.host_name, defaults::REDIS_HOST_NAME);
        assert_eq!(settings.redis.response_timeout(), Duration::from_millis(2000));
        assert!(settings.jwt.secret_key.expose_secret().is_empty());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            env::set_var(JWT_SECRET_KEY_ENV_VAR, "env-secret");
            env::set_var(JWT_EXPIRE_MINUTES_ENV_VAR, "30");
        }

        let settings = Settings::load().unwrap();

        unsafe {
            env::remove_var(JWT_SECRET_KEY_ENV_VAR);
            env::remove_var(JWT_EXPIRE_MINUTES_ENV_VAR);
        }

        assert_eq!(settings.jwt.secret_key.expose_secret(), "env-secret");
        assert_eq!(settings.jwt.expire_minutes, 30);
        assert_eq!(settings.jwt.token_ttl(), Duration::from_secs(1800));
    }
}
