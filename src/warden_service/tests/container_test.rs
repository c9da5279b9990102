use std::sync::Arc;
use std::time::Duration;

use testcontainers_modules::redis::{REDIS_PORT, Redis};
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use tokio::sync::RwLock;
use warden_adapters::RedisSessionCache;
use warden_core::{SessionCache, TokenKind, UserId};
use warden_service::helpers::get_redis_client;

#[tokio::test]
async fn test_redis_session_cache_round_trip() {
    let container = Redis::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(REDIS_PORT).await.unwrap();

    let conn = get_redis_client(&format!("{host}:{port}"))
        .unwrap()
        .get_connection()
        .unwrap();
    let cache = RedisSessionCache::new(Arc::new(RwLock::new(conn)));

    cache
        .set(UserId(1), TokenKind::Login, "tok", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(
        cache.get(UserId(1), TokenKind::Login).await.unwrap(),
        Some("tok".to_owned())
    );

    cache.remove(UserId(1), TokenKind::Login).await.unwrap();
    assert_eq!(cache.get(UserId(1), TokenKind::Login).await.unwrap(), None);

    cache
        .add_to_blacklist("tok", Duration::from_secs(60))
        .await
        .unwrap();
    assert!(cache.is_blacklisted("tok").await.unwrap());
    assert!(!cache.is_blacklisted("other").await.unwrap());
}
