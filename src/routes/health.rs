//! Health check endpoint for container orchestration.
//!
//! Liveness probe only: answers 200 OK whenever the process can serve HTTP.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
