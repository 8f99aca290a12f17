//! Notes API endpoints
//!
//! Notes always belong to a todo and are addressed through it

use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateNoteValues;
use crate::database::Database;
use crate::database::UpdateNoteValues;
use crate::notes::Note;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::parse_content;
use super::utils::fetch_todo;

/// Note response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID
    pub id: i32,

    /// ID of the todo the note belongs to
    pub todo_id: i32,

    /// Content of the note
    pub content: String,

    /// Creation date
    pub created_at: NaiveDateTime,
}

impl NoteResponse {
    /// Create a response from a [`Note`](Note)
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            todo_id: note.todo_id,
            content: note.content,
            created_at: note.created_at,
        }
    }

    /// Create a response from multiple [`Note`](Note)s
    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// List all notes of a todo, newest first
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     http://localhost:8000/api/todos/1/notes
/// ```
///
/// Response:
/// ```json
/// { "data": [ { "id": 1, "todoId": 1, "content": "Use the small watering can" ... } ] }
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    PathParameters(todo_id): PathParameters<i32>,
) -> Result<Success<Vec<NoteResponse>>, Error> {
    let todo = fetch_todo(&database, &todo_id).await?;

    let notes = database
        .find_all_notes_by_todo(&todo)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(NoteResponse::from_note_multiple(notes)))
}

/// Create note form
///
/// Fields to create a note with
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteForm {
    /// Content to create a note with, can not be empty
    content: String,
}

/// Create a note for a todo based on the [`CreateNoteForm`](CreateNoteForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "content": "Use the small watering can" }' \
///     http://localhost:8000/api/todos/1/notes
/// ```
///
/// Response
/// ```json
/// { "data": { "id": 1, "todoId": 1, "content": "Use the small watering can" ... } }
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    PathParameters(todo_id): PathParameters<i32>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let todo = fetch_todo(&database, &todo_id).await?;

    let content = parse_content(&form.content)?;

    let values = CreateNoteValues { content: &content };

    let note = database
        .create_note(&todo, &values)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::created(NoteResponse::from_note(note)))
}

/// Update note form
///
/// Fields to update a note with
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteForm {
    /// New content of the note, can not be empty
    content: String,
}

/// Update a note based on the [`UpdateNoteForm`](UpdateNoteForm) form
///
/// The note is matched on both its own ID and the todo ID from the path, a
/// note ID on its own never resolves across todos
///
/// Request:
/// ```sh
/// curl -v -XPATCH -H 'Content-Type: application/json' \
///     -d '{ "content": "Use the big watering can" }' \
///     http://localhost:8000/api/todos/1/notes/1
/// ```
///
/// Response
/// ```json
/// { "data": { "id": 1, "todoId": 1, "content": "Use the big watering can" ... } }
/// ```
pub async fn update(
    Extension(database): Extension<Database>,
    PathParameters((todo_id, note_id)): PathParameters<(i32, i32)>,
    Form(form): Form<UpdateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let content = parse_content(&form.content)?;

    let values = UpdateNoteValues { content: &content };

    let note = database
        .update_note(&todo_id, &note_id, &values)
        .await
        .map_err(Error::internal_server_error)?;

    note.map_or_else(
        || Err(Error::not_found("Note not found")),
        |note| Ok(Success::ok(NoteResponse::from_note(note))),
    )
}

/// Delete a note
///
/// The note is matched on both its own ID and the todo ID from the path
///
/// Request:
/// ```sh
/// curl -v -XDELETE http://localhost:8000/api/todos/1/notes/1
/// ```
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters((todo_id, note_id)): PathParameters<(i32, i32)>,
) -> Result<Success<&'static str>, Error> {
    let deleted = database
        .delete_note(&todo_id, &note_id)
        .await
        .map_err(Error::internal_server_error)?;

    if deleted {
        Ok(Success::<&'static str>::no_content())
    } else {
        Err(Error::not_found("Note not found"))
    }
}
