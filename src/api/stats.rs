//! Statistics endpoint

use axum::Extension;
use serde::Serialize;

use crate::database::Database;
use crate::stats::Stats;

use super::Error;
use super::Success;

/// Stats response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of todos
    pub total_todos: i64,

    /// Number of completed todos
    pub completed_todos: i64,

    /// Number of todos still open
    pub pending_todos: i64,

    /// Number of notes across all todos
    pub total_notes: i64,
}

impl StatsResponse {
    /// Create a response from [`Stats`](Stats)
    fn from_stats(stats: Stats) -> Self {
        Self {
            total_todos: stats.total_todos,
            completed_todos: stats.completed_todos,
            pending_todos: stats.pending_todos,
            total_notes: stats.total_notes,
        }
    }
}

/// Aggregate counters over all todos and notes
///
/// An empty store reports zeros on all counters
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/api/stats
/// ```
///
/// Response:
/// ```json
/// { "data": { "totalTodos": 3, "completedTodos": 2, "pendingTodos": 1, "totalNotes": 5 } }
/// ```
pub async fn stats(
    Extension(database): Extension<Database>,
) -> Result<Success<StatsResponse>, Error> {
    let stats = database
        .stats()
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(StatsResponse::from_stats(stats)))
}
