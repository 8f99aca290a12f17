//! Form types

/// Values to create a Todo
pub struct CreateTodoValues<'a> {
    /// The title of the todo
    pub title: &'a str,

    /// Optional longer description
    pub description: Option<&'a String>,
}

/// Values to update a Todo
///
/// Only the provided fields end up in the update statement
pub struct UpdateTodoValues<'a> {
    /// New title of the todo
    pub title: Option<&'a String>,

    /// New description of the todo
    pub description: Option<&'a String>,

    /// New completion state of the todo
    pub completed: Option<&'a bool>,
}

impl UpdateTodoValues<'_> {
    /// Are there no values to update?
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Content of the note
    ///
    /// Can be anything
    pub content: &'a str,
}

/// Values to update a Note
pub struct UpdateNoteValues<'a> {
    /// New content of the note
    pub content: &'a str,
}
