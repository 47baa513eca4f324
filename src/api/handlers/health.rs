/// Health check endpoint handler
/// Returns a fixed message with 200 status code. It reports that the process
/// is up; it does not probe the database connection.
pub async fn health() -> &'static str {
    "OK - Server is healthy"
}
