//! Connection provider: a lazily-connecting PostgreSQL pool handing out one scoped connection per request.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres};

/// A connection checked out for the duration of one handler call. Returned to the pool on drop.
pub type Conn = PoolConnection<Postgres>;

#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the pool without connecting. The first request opens the first connection,
    /// so the process starts even while the store is down.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);
        Self { pool }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check out a connection. Failure means the store is unreachable.
    pub async fn acquire(&self) -> Result<Conn, AppError> {
        self.pool.acquire().await.map_err(AppError::Unavailable)
    }

    /// `SELECT 1` round trip for the readiness probe.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await.is_ok()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
