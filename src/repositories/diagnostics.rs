use crate::db::DbPool;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, Row};

/// The single row of `SELECT NOW()`: the database server's current time.
#[derive(Debug, Clone, Serialize)]
pub struct ServerTime {
    pub now: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for ServerTime {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            now: row.try_get("now")?,
        })
    }
}

pub struct DiagnosticsRepository;

impl DiagnosticsRepository {
    pub async fn current_time(pool: &DbPool) -> Result<ServerTime, AppError> {
        let result = sqlx::query_as::<_, ServerTime>("SELECT NOW()")
            .fetch_one(pool)
            .await?;

        Ok(result)
    }
}
