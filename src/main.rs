#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use axum::Extension;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowMethods;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::api::router;
use crate::database::Database;
use crate::database::DatabaseConfig;
use crate::utils::env_var_or_else;

mod api;
mod database;
mod graceful_shutdown;
mod notes;
mod stats;
#[cfg(test)]
mod tests;
mod todos;
mod utils;

const DEFAULT_RUST_LOG: &str = "tickbox=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// Origins of the local development frontends
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let app = setup_app(DatabaseConfig::DetectConfig).await?;

    let address = setup_address()?;
    tracing::info!("Listening on {}", address);

    let listener = TcpListener::bind(address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if the database connection can not be set up
pub async fn setup_app(config: DatabaseConfig) -> Result<Router> {
    let database = Database::from_config(config).await?;

    Ok(create_router(database))
}

/// Create the router for Tickbox
fn create_router(database: Database) -> Router {
    Router::new()
        .nest("/api", router())
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
        .layer(Extension(database))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

/// Allow the configured frontend origins, with credentials
///
/// Methods and headers mirror the request, wildcards are not valid in
/// combination with credentials
fn setup_cors() -> CorsLayer {
    let origins = env_var_or_else("CORS_ORIGINS", || String::from(DEFAULT_CORS_ORIGINS));

    let origins = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Ok(port) = std::env::var("PORT") {
        // only check non-empty strings
        if !port.is_empty() {
            let port = port.parse::<u16>()?;

            address.set_port(port);
        }
    }

    Ok(address)
}
