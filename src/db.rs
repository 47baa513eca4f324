use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Open the database pool.
///
/// The pool holds exactly one physical connection: concurrent queries queue
/// on checkout and run one at a time, in checkout order. The first connection
/// is established eagerly, so an unreachable host or bad credentials fail
/// here instead of on the first request.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DbPool> {
    let options = PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.name);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}
