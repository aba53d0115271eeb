use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, middleware};

pub mod pages;
pub mod probes;
pub mod users;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // probes
        .route("/live", get(probes::handler::live))
        .route("/ready", get(probes::handler::ready))
        .route("/health", get(probes::handler::health))
        // HTML pages
        .route("/", get(pages::handler::index))
        .route("/form", get(pages::handler::form))
        .route("/list", get(pages::handler::list_users))
        // registration
        .route("/submit", post(users::handler::submit))
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .with_state(state)
}
