//! Startup connectivity to the database
//!
//! The database may still be starting when the server comes up, so the first
//! connection is retried a bounded number of times with a fixed delay.
//! Request handling never retries.

use std::future::Future;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Connection, PgPool};

use crate::config::DatabaseConfig;

/// Run `op` up to `attempts` times, sleeping `delay` between failures.
///
/// Returns the first success, or the last error once every attempt failed.
/// No sleep follows the final attempt. Zero attempts counts as one.
pub async fn retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    "Database not reachable ({}), retrying in {:?}... ({}/{})",
                    e,
                    delay,
                    attempt,
                    attempts
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!("Giving up on database after {} attempts: {}", attempts, e);
                return Err(e);
            }
        }
    }
}

/// Open a connection pool and verify it with a round-trip ping
pub async fn open_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(config.connect_options())
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    drop(conn);

    Ok(pool)
}

/// Connect to the configured database, retrying per the configured policy
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    retry(config.connect_attempts, config.retry_delay(), |_| open_pool(config)).await
}
