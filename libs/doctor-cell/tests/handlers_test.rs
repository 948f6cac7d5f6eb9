// libs/doctor-cell/tests/handlers_test.rs

use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawQuery, State},
    Json,
};
use assert_matches::assert_matches;

use doctor_cell::handlers::*;
use doctor_cell::models::{ConsultationType, FilterUpdate, SortBy};
use doctor_cell::{Catalog, DirectoryState, StaticDoctorSource};
use shared_models::error::AppError;
use shared_utils::test_utils::{MockDoctorResponses, TestConfig};

fn pending_state() -> Arc<DirectoryState> {
    Arc::new(DirectoryState::new(TestConfig::default().to_app_config()))
}

async fn loaded_state() -> Arc<DirectoryState> {
    let state = pending_state();
    let records = MockDoctorResponses::three_doctors()
        .as_array()
        .cloned()
        .unwrap_or_default();
    state.refresh(&StaticDoctorSource::new(records)).await;
    state
}

#[tokio::test]
async fn test_get_directory_while_loading() {
    let state = pending_state();

    let Json(view) = get_directory(State(state), RawQuery(Some("sortBy=fees".to_string()))).await;

    assert!(view.loading);
    assert!(view.doctors.is_empty());
    assert_eq!(view.summary, "Loading...");
    assert_eq!(view.filters.sort_by, SortBy::Fees);
    assert_eq!(view.url, "/?sortBy=fees");
}

#[tokio::test]
async fn test_get_directory_after_refresh() {
    let state = loaded_state().await;

    let Json(view) = get_directory(State(state), RawQuery(None)).await;

    assert!(!view.loading);
    assert_eq!(view.total, 3);
    assert_eq!(view.specialty_options, vec!["Cardiology", "Dermatology"]);
    assert!(view.sort_label.is_none());
}

#[tokio::test]
async fn test_update_filters_handler_merges_partial_update() {
    let state = loaded_state().await;

    let request = FilterChangeRequest {
        query: "?search=dr&sortBy=fees".to_string(),
        update: FilterUpdate::consultation(ConsultationType::Video),
    };
    let Json(view) = update_filters(State(state), Json(request)).await;

    assert_eq!(view.filters.search_query, "dr");
    assert_eq!(view.filters.sort_by, SortBy::Fees);
    assert_eq!(view.filters.consultation_type, ConsultationType::Video);
    let ids: Vec<_> = view.doctors.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "A"]);
    assert_eq!(view.url, "/?consultationType=video&sortBy=fees&search=dr");
}

#[tokio::test]
async fn test_toggle_specialty_handler_unchecks() {
    let state = loaded_state().await;

    let request = SpecialtyToggleRequest {
        query: "specialties=Cardiology%2CDermatology".to_string(),
        specialty: "Cardiology".to_string(),
        selected: false,
    };
    let Json(view) = toggle_specialty(State(state), Json(request)).await;

    assert_eq!(view.filters.specialties, vec!["Dermatology"]);
    assert_eq!(view.url, "/?specialties=Dermatology");
}

#[tokio::test]
async fn test_suggestions_handler() {
    let state = loaded_state().await;

    let Json(body) = get_suggestions(
        State(state),
        Query(SuggestionQuery { q: "iyer".to_string() }),
    )
    .await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["suggestions"][0]["id"], "C");
}

#[tokio::test]
async fn test_get_doctor_not_found_while_loading() {
    let state = pending_state();

    let result = get_doctor(State(state), Path("A".to_string())).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_custom_page_path() {
    let mut config = TestConfig::default();
    config.page_path = "/find-doctors".to_string();
    let state = Arc::new(DirectoryState::with_catalog(
        config.to_app_config(),
        Catalog::from_doctors(Vec::new()),
    ));

    let Json(view) = get_directory(State(state), RawQuery(Some("search=x".to_string()))).await;

    assert_eq!(view.url, "/find-doctors?search=x");
    assert_eq!(view.summary, "0 doctors found");
}
