//! All API endpoint setup

use axum::Router;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;

pub use health::health;
pub use request::Form;
pub use request::PathParameters;
pub use request::QueryParameters;
pub use request::parse_content;
pub use request::parse_title;
pub use response::Error;
pub use response::Success;

mod health;
mod notes;
mod request;
mod response;
mod stats;
mod todos;
mod utils;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    let notes = Router::new()
        .route("/", get(notes::list))
        .route("/", post(notes::create))
        .route("/{note}", patch(notes::update))
        .route("/{note}", delete(notes::delete));

    let todos = Router::new()
        .route("/", get(todos::list))
        .route("/", post(todos::create))
        .route("/{todo}", get(todos::single))
        .route("/{todo}", patch(todos::update))
        .route("/{todo}", delete(todos::delete))
        .nest("/{todo}/notes", notes);

    Router::new()
        .nest("/todos", todos)
        .route("/stats", get(stats::stats))
}
