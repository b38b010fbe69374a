use crate::domain_port::CredentialRepoError;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use std::str::FromStr;
use std::time::Duration;

pub struct PoolConfig<'a> {
    pub url: &'a str,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Builds a lazily-connecting pool so the service can start before the
/// database is reachable; failures surface per request instead.
pub fn connect_lazy(config: &PoolConfig<'_>) -> anyhow::Result<MySqlPool> {
    let options = MySqlConnectOptions::from_str(config.url)?;
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy_with(options);
    Ok(pool)
}

pub fn classify(context: &str, err: sqlx::Error) -> CredentialRepoError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => CredentialRepoError::Unavailable(format!("{context}: {err}")),
        other => CredentialRepoError::Store(format!("{context}: {other}")),
    }
}
