use crate::db::DbPool;
use crate::repositories::diagnostics::ServerTime;
use crate::repositories::DiagnosticsRepository;
use axum::{extract::State, http::StatusCode, response::Json};

/// Connectivity test: runs `SELECT NOW()` over the shared connection and
/// returns the row as JSON. A failed query maps to 500.
pub async fn test_connection(State(pool): State<DbPool>) -> Result<Json<ServerTime>, StatusCode> {
    let row = DiagnosticsRepository::current_time(&pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(row))
}
