//! Database row types and their conversions into models
//!
//! Rows deserialize into the `Sqlx*` structs first, which checks column
//! presence and types, before turning into the plain models.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::notes::Note;
use crate::stats::Stats;
use crate::todos::Todo;

/// `SQLx` version of a todo row
#[derive(FromRow)]
pub struct SqlxTodo {
    /// Todo ID
    pub id: i32,

    /// Title
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

impl Todo {
    /// Create todo from `SQLx` version
    pub fn from_sqlx_todo(todo: SqlxTodo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }

    /// Maybe create todo from `SQLx` version
    pub fn from_sqlx_todo_optional(todo: Option<SqlxTodo>) -> Option<Self> {
        todo.map(Self::from_sqlx_todo)
    }

    /// Create multiple todos from `SQLx` version
    pub fn from_sqlx_todo_multiple(mut todos: Vec<SqlxTodo>) -> Vec<Self> {
        todos
            .drain(..)
            .map(Self::from_sqlx_todo)
            .collect::<Vec<Self>>()
    }
}

/// `SQLx` version of a note row
#[derive(FromRow)]
pub struct SqlxNote {
    /// Note ID
    pub id: i32,

    /// ID of the todo the note belongs to
    pub todo_id: i32,

    /// Content
    pub content: String,

    /// Creation date
    pub created_at: NaiveDateTime,
}

impl Note {
    /// Create note from `SQLx` version
    pub fn from_sqlx_note(note: SqlxNote) -> Self {
        Self {
            id: note.id,
            todo_id: note.todo_id,
            content: note.content,
            created_at: note.created_at,
        }
    }

    /// Maybe create note from `SQLx` version
    pub fn from_sqlx_note_optional(note: Option<SqlxNote>) -> Option<Self> {
        note.map(Self::from_sqlx_note)
    }

    /// Create multiple notes from `SQLx` version
    pub fn from_sqlx_note_multiple(mut notes: Vec<SqlxNote>) -> Vec<Self> {
        notes
            .drain(..)
            .map(Self::from_sqlx_note)
            .collect::<Vec<Self>>()
    }
}

/// `SQLx` version of the aggregate counters row
#[derive(FromRow)]
pub struct SqlxStats {
    /// Number of todos
    pub total_todos: i64,

    /// Number of completed todos
    pub completed_todos: i64,

    /// Number of todos still open
    pub pending_todos: i64,

    /// Number of notes across all todos
    pub total_notes: i64,
}

impl Stats {
    /// Create stats from `SQLx` version
    pub fn from_sqlx_stats(stats: SqlxStats) -> Self {
        Self {
            total_todos: stats.total_todos,
            completed_todos: stats.completed_todos,
            pending_todos: stats.pending_todos,
            total_notes: stats.total_notes,
        }
    }
}
