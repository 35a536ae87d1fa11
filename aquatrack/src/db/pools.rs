//! Connection pool construction.
//!
//! Every request acquires its own connection (or transaction) from the pool, so concurrent
//! requests never share a single database handle. Sizing and timeouts come from
//! [`PoolSettings`].

use crate::config::PoolSettings;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{info, instrument};

/// Build [`PgPoolOptions`] from pool settings. A zero idle timeout or lifetime means "never".
pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    let idle_timeout = (settings.idle_timeout_secs > 0).then(|| Duration::from_secs(settings.idle_timeout_secs));
    let max_lifetime = (settings.max_lifetime_secs > 0).then(|| Duration::from_secs(settings.max_lifetime_secs));

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(idle_timeout)
        .max_lifetime(max_lifetime)
}

/// Connect a pool to `url` using `settings`
#[instrument(skip_all, fields(max_connections = settings.max_connections))]
pub async fn connect(url: &str, settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(settings).connect(url).await?;
    info!("Database pool connected");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_from_settings() {
        let settings = PoolSettings {
            max_connections: 7,
            min_connections: 2,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 0,
            max_lifetime_secs: 60,
        };

        let options = pool_options(&settings);
        assert_eq!(options.get_max_connections(), 7);
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(5));
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), Some(Duration::from_secs(60)));
    }
}
