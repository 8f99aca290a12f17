use axum::http::StatusCode;

use crate::tests::helper;

#[sqlx::test]
async fn test_notes(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // setup
    let content_one = "Use the small watering can";
    let content_two = "The cactus does not need much";
    let content_three = "Skip the orchid this week";

    // create todo for notes
    let (status_code, todo, _) = helper::maybe_create_todo(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let todo = todo.unwrap();

    // verify empty note list
    let (status_code, notes, _) = helper::list_notes(&mut app, &todo.id).await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(notes.is_some());
    assert_eq!(Vec::<helper::Note>::new(), notes.unwrap());

    // create note
    let (status_code, note, _) = helper::maybe_create_note(&mut app, &todo.id, content_one).await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert!(note.is_some());
    let note_one = note.unwrap();
    assert_eq!(content_one.to_string(), note_one.content);
    assert_eq!(todo.id, note_one.todo_id);

    // create another note
    let (status_code, note, _) = helper::maybe_create_note(&mut app, &todo.id, content_two).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note_two = note.unwrap();

    // fetch notes, newest first
    let (status_code, notes, _) = helper::list_notes(&mut app, &todo.id).await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(notes.is_some());
    let notes = notes.unwrap();
    assert_eq!(2, notes.len());
    assert_eq!(note_two.id, notes[0].id);
    assert_eq!(note_one.id, notes[1].id);

    // update note
    let (status_code, note, _) =
        helper::maybe_update_note(&mut app, &todo.id, &note_one.id, content_three).await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(note.is_some());
    assert_eq!(content_three.to_string(), note.unwrap().content);

    // delete note
    let (status_code, _) = helper::maybe_delete_note(&mut app, &todo.id, &note_one.id).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    // delete again
    let (status_code, error) = helper::maybe_delete_note(&mut app, &todo.id, &note_one.id).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Note not found".to_string()), error);

    // the other note is untouched
    let (status_code, notes, _) = helper::list_notes(&mut app, &todo.id).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert_eq!(1, notes.len());
    assert_eq!(note_two.id, notes[0].id);
}

#[sqlx::test]
async fn test_note_requires_todo(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // list notes of a missing todo
    let (status_code, _, error) = helper::list_notes(&mut app, &1).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Todo not found".to_string()), error);

    // create a note on a missing todo
    let (status_code, _, error) =
        helper::maybe_create_note(&mut app, &1, "Use the small watering can").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Todo not found".to_string()), error);
}

#[sqlx::test]
async fn test_note_content_validation(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // create todo for notes
    let (status_code, todo, _) = helper::maybe_create_todo(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let todo = todo.unwrap();

    // create note without content
    let (status_code, _, error) = helper::maybe_create_note(&mut app, &todo.id, "").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Content can not be empty".to_string()), error);

    // update an existing note with empty content
    let (status_code, note, _) =
        helper::maybe_create_note(&mut app, &todo.id, "Use the small watering can").await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();

    let (status_code, _, error) = helper::maybe_update_note(&mut app, &todo.id, &note.id, "").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Content can not be empty".to_string()), error);
}

#[sqlx::test]
async fn test_todo_delete_cascades(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // create todo with notes
    let (status_code, todo, _) = helper::maybe_create_todo(&mut app, "Water the plants", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let todo = todo.unwrap();

    helper::maybe_create_note(&mut app, &todo.id, "Use the small watering can").await;
    helper::maybe_create_note(&mut app, &todo.id, "The cactus does not need much").await;

    let (_, stats) = helper::stats(&mut app).await;
    assert_eq!(2, stats.unwrap().total_notes);

    // delete the todo
    let (status_code, _) = helper::maybe_delete_todo(&mut app, &todo.id).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    // the todo is gone
    let (status_code, _, error) = helper::list_notes(&mut app, &todo.id).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Todo not found".to_string()), error);

    // and the notes went with it
    let (status_code, stats) = helper::stats(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    let stats = stats.unwrap();
    assert_eq!(0, stats.total_todos);
    assert_eq!(0, stats.total_notes);
}
