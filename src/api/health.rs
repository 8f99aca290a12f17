//! Health check endpoint

use chrono::NaiveDateTime;
use chrono::Utc;
use serde::Serialize;

use super::Success;

/// Health response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Static service status
    pub status: &'static str,

    /// Current server time
    pub timestamp: NaiveDateTime,
}

/// Report the service status with the current server time
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/health
/// ```
///
/// Response:
/// ```json
/// { "data": { "status": "healthy", "timestamp": "2026-08-06T12:00:00" } }
/// ```
pub async fn health() -> Success<HealthResponse> {
    Success::ok(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().naive_utc(),
    })
}
