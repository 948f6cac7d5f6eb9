use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawQuery, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{DirectoryView, FilterUpdate};
use crate::services::directory::{DoctorDirectory, RecordedHistory};
use crate::state::DirectoryState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterChangeRequest {
    /// Query string of the page the change was made on.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub update: FilterUpdate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyToggleRequest {
    #[serde(default)]
    pub query: String,
    pub specialty: String,
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

async fn open_directory(
    state: &DirectoryState,
    query: Option<&str>,
) -> DoctorDirectory<RecordedHistory> {
    DoctorDirectory::with_catalog(
        state.location(query),
        RecordedHistory::default(),
        state.catalog().await,
    )
}

// ==============================================================================
// DIRECTORY PAGE
// ==============================================================================

#[axum::debug_handler]
pub async fn get_directory(
    State(state): State<Arc<DirectoryState>>,
    RawQuery(query): RawQuery,
) -> Json<DirectoryView> {
    let directory = open_directory(&state, query.as_deref()).await;
    Json(directory.view())
}

#[axum::debug_handler]
pub async fn update_filters(
    State(state): State<Arc<DirectoryState>>,
    Json(request): Json<FilterChangeRequest>,
) -> Json<DirectoryView> {
    let mut directory = open_directory(&state, Some(request.query.as_str())).await;
    directory.update_filters(request.update);

    debug!("Filters changed, page URL is now {}", directory.url());
    Json(directory.view())
}

#[axum::debug_handler]
pub async fn toggle_specialty(
    State(state): State<Arc<DirectoryState>>,
    Json(request): Json<SpecialtyToggleRequest>,
) -> Json<DirectoryView> {
    let mut directory = open_directory(&state, Some(request.query.as_str())).await;
    directory.toggle_specialty(&request.specialty, request.selected);

    Json(directory.view())
}

// ==============================================================================
// SEARCH BOX & FILTER OPTIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_suggestions(
    State(state): State<Arc<DirectoryState>>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Value> {
    let directory = open_directory(&state, None).await;
    let suggestions = directory.suggestions(&query.q);

    Json(json!({
        "suggestions": suggestions,
        "total": suggestions.len()
    }))
}

#[axum::debug_handler]
pub async fn get_specialties(State(state): State<Arc<DirectoryState>>) -> Json<Value> {
    let catalog = state.catalog().await;

    Json(json!({
        "specialties": catalog.specialty_options(),
        "loading": catalog.is_loading()
    }))
}

// ==============================================================================
// DOCTOR DETAIL
// ==============================================================================

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DirectoryState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let catalog = state.catalog().await;

    let doctor = catalog
        .find(&doctor_id)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!({
        "doctor": doctor,
        "photoUrl": doctor.photo_or_placeholder()
    })))
}
