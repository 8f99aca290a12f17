//! Utility functions for the API

use crate::api::Error;
use crate::database::Database;
use crate::todos::Todo;

/// Fetch todo from database
pub async fn fetch_todo(database: &Database, todo_id: &i32) -> Result<Todo, Error> {
    database
        .find_single_todo_by_id(todo_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Todo not found")), Ok)
}
