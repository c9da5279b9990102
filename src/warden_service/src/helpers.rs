use std::sync::Arc;

use redis::{Client, RedisResult};
use tokio::sync::RwLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden_adapters::config::RedisSettings;

/// Configure and return a shared Redis connection
///
/// This function connects to the configured host and applies the
/// configured response timeout to reads and writes on the socket.
///
/// # Returns
/// A Redis connection ready to back a `RedisSessionCache`
///
/// # Panics
/// Panics if unable to connect to Redis or apply the timeouts
pub fn configure_redis(settings: &RedisSettings) -> Arc<RwLock<redis::Connection>> {
    let conn = get_redis_client(&settings.host_name)
        .expect("Failed to get Redis client")
        .get_connection()
        .expect("Failed to get Redis connection");

    conn.set_read_timeout(Some(settings.response_timeout()))
        .expect("Failed to set Redis read timeout");
    conn.set_write_timeout(Some(settings.response_timeout()))
        .expect("Failed to set Redis write timeout");

    Arc::new(RwLock::new(conn))
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname, optionally with port
///
/// # Returns
/// Result containing the Redis client or an error
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

/// Install the global tracing subscriber: compact output, `RUST_LOG`
/// filtering with an `info` default, spans captured into errors.
pub fn init_tracing() -> Result<(), tracing_subscriber::filter::ParseError> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
