use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use warden_core::{SessionCache, SessionCacheError, TokenKind, UserId};

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn live(&self) -> bool {
        self.expires_at > Instant::now()
    }
}

/// In-memory stand-in for the Redis cache. Expiry is checked lazily on
/// read against the tokio clock, so tests can drive it with
/// `tokio::time::advance`.
#[derive(Default, Clone)]
pub struct InMemorySessionCache {
    slots: Arc<RwLock<HashMap<(UserId, TokenKind), Entry>>>,
    blacklist: Arc<RwLock<HashMap<String, Instant>>>,
}

impl InMemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionCache for InMemorySessionCache {
    async fn set(
        &self,
        user_id: UserId,
        kind: TokenKind,
        token: &str,
        ttl: Duration,
    ) -> Result<(), SessionCacheError> {
        let entry = Entry {
            value: token.to_owned(),
            expires_at: Instant::now() + ttl,
        };
        self.slots.write().await.insert((user_id, kind), entry);
        Ok(())
    }

    async fn get(
        &self,
        user_id: UserId,
        kind: TokenKind,
    ) -> Result<Option<String>, SessionCacheError> {
        let slots = self.slots.read().await;
        let token = slots
            .get(&(user_id, kind))
            .filter(|entry| entry.live())
            .map(|entry| entry.value.clone());
        Ok(token)
    }

    async fn remove(&self, user_id: UserId, kind: TokenKind) -> Result<(), SessionCacheError> {
        self.slots.write().await.remove(&(user_id, kind));
        Ok(())
    }

    async fn add_to_blacklist(
        &self,
        token: &str,
        ttl: Duration,
    ) -> Result<(), SessionCacheError> {
        self.blacklist
            .write()
            .await
            .insert(token.to_owned(), Instant::now() + ttl);
        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, SessionCacheError> {
        let blacklist = self.blacklist.read().await;
        Ok(blacklist
            .get(token)
            .is_some_and(|expires_at| *expires_at > Instant::now()))
    }
}
