use std::sync::Arc;
use std::time::Duration;

use redis::{Commands, Connection};
use tokio::sync::RwLock;
use warden_core::{
    BLACKLIST_VALUE, SessionCache, SessionCacheError, TokenKind, UserId, blacklist_key, token_key,
};

/// Redis-backed session cache. Key layout and the blacklist marker
/// come from `warden_core::domain::session`, TTLs map onto `SET EX`.
#[derive(Clone)]
pub struct RedisSessionCache {
    conn: Arc<RwLock<Connection>>,
}

impl RedisSessionCache {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl SessionCache for RedisSessionCache {
    async fn set(
        &self,
        user_id: UserId,
        kind: TokenKind,
        token: &str,
        ttl: Duration,
    ) -> Result<(), SessionCacheError> {
        let key = token_key(user_id, kind);

        let mut conn = self.conn.write().await;
        conn.set_ex(key, token, ttl.as_secs())
            .map_err(|e| SessionCacheError::Unavailable(e.to_string()))
    }

    async fn get(
        &self,
        user_id: UserId,
        kind: TokenKind,
    ) -> Result<Option<String>, SessionCacheError> {
        let key = token_key(user_id, kind);

        let mut conn = self.conn.write().await;
        conn.get(&key)
            .map_err(|e| SessionCacheError::Unavailable(e.to_string()))
    }

    async fn remove(&self, user_id: UserId, kind: TokenKind) -> Result<(), SessionCacheError> {
        let key = token_key(user_id, kind);

        let mut conn = self.conn.write().await;
        conn.del(&key)
            .map_err(|e| SessionCacheError::Unavailable(e.to_string()))
    }

    async fn add_to_blacklist(
        &self,
        token: &str,
        ttl: Duration,
    ) -> Result<(), SessionCacheError> {
        let key = blacklist_key(token);

        let mut conn = self.conn.write().await;
        conn.set_ex(key, BLACKLIST_VALUE, ttl.as_secs())
            .map_err(|e| SessionCacheError::Unavailable(e.to_string()))
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, SessionCacheError> {
        let key = blacklist_key(token);

        let mut conn = self.conn.write().await;
        conn.exists(&key)
            .map_err(|e| SessionCacheError::Unavailable(e.to_string()))
    }
}
