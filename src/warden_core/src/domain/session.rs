use std::time::Duration;

use super::user::UserId;

/// Which cached token slot an operation addresses. Each user has at
/// most one live token per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Login,
    Reset,
}

/// Reset tokens live exactly this long. Not configurable.
pub const RESET_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Marker value stored under blacklist keys.
pub const BLACKLIST_VALUE: &str = "blacklisted";

pub fn token_key(user_id: UserId, kind: TokenKind) -> String {
    match kind {
        TokenKind::Login => format!("user:{}:login_token", user_id),
        TokenKind::Reset => format!("user:{}:reset_token", user_id),
    }
}

pub fn blacklist_key(token: &str) -> String {
    format!("blacklist:{}", token)
}
