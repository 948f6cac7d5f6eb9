use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::DirectoryState;

pub fn doctor_routes(state: Arc<DirectoryState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_directory))
        .route("/filters", post(handlers::update_filters))
        .route("/filters/specialties", post(handlers::toggle_specialty))
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/specialties", get(handlers::get_specialties))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
