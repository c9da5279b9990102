pub const CONFIG_FILE_NAME: &str = "warden";
pub const ENV_PREFIX: &str = "WARDEN";
pub const ENV_SEPARATOR: &str = "__";

pub mod env {
    pub const JWT_SECRET_KEY_ENV_VAR: &str = "WARDEN__JWT__SECRET_KEY";
    pub const JWT_ISSUER_ENV_VAR: &str = "WARDEN__JWT__ISSUER";
    pub const JWT_AUDIENCE_ENV_VAR: &str = "WARDEN__JWT__AUDIENCE";
    pub const JWT_EXPIRE_MINUTES_ENV_VAR: &str = "WARDEN__JWT__EXPIRE_MINUTES";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "WARDEN__REDIS__HOST_NAME";
    pub const REDIS_RESPONSE_TIMEOUT_ENV_VAR: &str = "WARDEN__REDIS__RESPONSE_TIMEOUT_IN_MILLIS";
}

pub mod defaults {
    pub const JWT_ISSUER: &str = "warden";
    pub const JWT_AUDIENCE: &str = "warden-clients";
    pub const JWT_EXPIRE_MINUTES: i64 = 60;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
    pub const REDIS_RESPONSE_TIMEOUT_IN_MILLIS: i64 = 2000;
}
