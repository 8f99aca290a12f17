//! Todos API endpoints
//!
//! Everything related to the todos management

use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateTodoValues;
use crate::database::Database;
use crate::database::UpdateTodoValues;
use crate::todos::Todo;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;
use super::parse_title;
use super::utils::fetch_todo;

/// Todo response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo ID
    pub id: i32,

    /// Title of the todo
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Completion state
    pub completed: bool,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}

impl TodoResponse {
    /// Create a response from a [`Todo`](Todo)
    fn from_todo(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }

    /// Create a response from multiple [`Todo`](Todo)s
    fn from_todo_multiple(mut todos: Vec<Todo>) -> Vec<Self> {
        todos
            .drain(..)
            .map(Self::from_todo)
            .collect::<Vec<Self>>()
    }
}

/// Filter for the todos list
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    /// Only include todos with this completion state
    completed: Option<bool>,
}

/// List all todos, newest first
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     'http://localhost:8000/api/todos?completed=true'
/// ```
///
/// Response:
/// ```json
/// { "data": [ { "id": 1, "title": "Water the plants" ... } ] }
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    QueryParameters(query): QueryParameters<ListTodosQuery>,
) -> Result<Success<Vec<TodoResponse>>, Error> {
    let todos = database
        .find_all_todos(query.completed.as_ref())
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(TodoResponse::from_todo_multiple(todos)))
}

/// Get a single todo
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     http://localhost:8000/api/todos/1
/// ```
///
/// Response:
/// ```json
/// { "data": { "id": 1, "title": "Water the plants" ... } }
/// ```
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(todo_id): PathParameters<i32>,
) -> Result<Success<TodoResponse>, Error> {
    fetch_todo(&database, &todo_id)
        .await
        .map(|todo| Success::ok(TodoResponse::from_todo(todo)))
}

/// Create todo form
///
/// Fields to create a todo with
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoForm {
    /// Title to create a todo with, can not be empty
    title: String,

    /// Optional longer description
    description: Option<String>,
}

/// Create a todo based on the [`CreateTodoForm`](CreateTodoForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "title": "Water the plants" }' \
///     http://localhost:8000/api/todos
/// ```
///
/// Response
/// ```json
/// { "data": { "id": 1, "title": "Water the plants", "completed": false ... } }
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateTodoForm>,
) -> Result<Success<TodoResponse>, Error> {
    let title = parse_title(&form.title)?;

    let values = CreateTodoValues {
        title: &title,
        description: form.description.as_ref(),
    };

    let todo = database
        .create_todo(&values)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::created(TodoResponse::from_todo(todo)))
}

/// Update todo form
///
/// Fields to update a todo with, all fields are optional and are not touched
/// when not provided
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoForm {
    /// New title of the todo, can not be empty
    title: Option<String>,

    /// New description of the todo
    description: Option<String>,

    /// New completion state of the todo
    completed: Option<bool>,
}

/// Update a todo based on the [`UpdateTodoForm`](UpdateTodoForm) form
///
/// Only provided values are processed, the other fields of the todo will not
/// be touched; without any values the current todo comes back unchanged
///
/// Request:
/// ```sh
/// curl -v -XPATCH -H 'Content-Type: application/json' \
///     -d '{ "completed": true }' \
///     http://localhost:8000/api/todos/1
/// ```
///
/// Response
/// ```json
/// { "data": { "id": 1, "title": "Water the plants", "completed": true ... } }
/// ```
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters(todo_id): PathParameters<i32>,
    Form(form): Form<UpdateTodoForm>,
) -> Result<Success<TodoResponse>, Error> {
    let todo = fetch_todo(&database, &todo_id).await?;

    let title = if let Some(ref title) = form.title {
        Some(parse_title(title)?)
    } else {
        None
    };

    let values = UpdateTodoValues {
        title: title.as_ref(),
        description: form.description.as_ref(),
        completed: form.completed.as_ref(),
    };

    if values.is_empty() {
        return Ok(Success::ok(TodoResponse::from_todo(todo)));
    }

    let updated_todo = database
        .update_todo(&todo, &values)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(TodoResponse::from_todo(updated_todo)))
}

/// Delete a todo
///
/// The notes of the todo are deleted with it
///
/// Request:
/// ```sh
/// curl -v -XDELETE http://localhost:8000/api/todos/1
/// ```
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(todo_id): PathParameters<i32>,
) -> Result<Success<&'static str>, Error> {
    let deleted = database
        .delete_todo(&todo_id)
        .await
        .map_err(Error::internal_server_error)?;

    if deleted {
        Ok(Success::<&'static str>::no_content())
    } else {
        Err(Error::not_found("Todo not found"))
    }
}
