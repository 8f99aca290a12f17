use axum::http::StatusCode;

use crate::tests::helper;

#[sqlx::test]
async fn test_invalid_json(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // missing data
    let body = r"{}";
    let (status_code, _, error) =
        helper::maybe_create_todo_with_raw_body(&mut app, body, true).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!("Data error".to_string(), error.error);
    assert_eq!(
        Some("Failed to deserialize the JSON body into the target type".to_string()),
        error.description
    );

    // syntax error
    let body = r#"{"}"#;
    let (status_code, _, error) =
        helper::maybe_create_todo_with_raw_body(&mut app, body, true).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!("JSON syntax error".to_string(), error.error);
    assert!(error.description.is_some());

    // missing content type
    let body = r"{}";
    let (status_code, _, error) =
        helper::maybe_create_todo_with_raw_body(&mut app, body, false).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert!(error.is_some());
    let error = error.unwrap();
    assert_eq!(
        "Missing `application/json` content type".to_string(),
        error.error
    );
}

#[sqlx::test]
async fn test_invalid_todo_id(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // validate path parameter
    let (status_code, _, error) = helper::single_todo_with_str(&mut app, "some-id").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Invalid path parameter".to_string()), error);
}

#[sqlx::test]
async fn test_invalid_completed_filter(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    // validate query parameter
    let (status_code, error) = helper::list_todos_with_raw_query(&mut app, "completed=banana").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Invalid query parameter".to_string()), error);
}
