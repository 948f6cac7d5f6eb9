// libs/doctor-cell/src/services/engine.rs

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::models::{ConsultationType, Doctor, FilterState, SearchSuggestion, SortBy, MAX_SUGGESTIONS};

/// Derive the displayed list from the canonical set.
///
/// Stages run in a fixed order: name search, consultation mode, specialty,
/// then sort. Each inactive stage passes its input through untouched, so
/// the default [`FilterState`] returns `doctors` in the same order.
pub fn derive(doctors: &[Doctor], filters: &FilterState) -> Vec<Doctor> {
    let mut result: Vec<Doctor> = doctors.to_vec();

    result = search_by_name(result, &filters.search_query);
    result = filter_by_consultation(result, filters.consultation_type);
    result = filter_by_specialties(result, &filters.specialties);
    sort_doctors(&mut result, filters.sort_by);

    result
}

pub fn search_by_name(doctors: Vec<Doctor>, query: &str) -> Vec<Doctor> {
    if query.is_empty() {
        return doctors;
    }
    let folded = query.to_lowercase();
    doctors.into_iter().filter(|d| d.name_contains(&folded)).collect()
}

pub fn filter_by_consultation(doctors: Vec<Doctor>, consultation: ConsultationType) -> Vec<Doctor> {
    if consultation == ConsultationType::None {
        return doctors;
    }
    doctors.into_iter().filter(|d| d.offers(consultation)).collect()
}

pub fn filter_by_specialties(doctors: Vec<Doctor>, wanted: &[String]) -> Vec<Doctor> {
    if wanted.is_empty() {
        return doctors;
    }
    doctors
        .into_iter()
        .filter(|d| d.specialties.iter().any(|s| wanted.contains(s)))
        .collect()
}

/// `slice::sort_by_key` is a stable sort, so equal keys keep their
/// relative order from the filtered sequence.
pub fn sort_doctors(doctors: &mut [Doctor], sort_by: SortBy) {
    match sort_by {
        SortBy::Fees => doctors.sort_by_key(|d| d.fee_amount),
        SortBy::Experience => doctors.sort_by_key(|d| Reverse(d.experience_years)),
        SortBy::None => {}
    }
}

/// Sorted, de-duplicated, non-empty specialty labels across `doctors`.
pub fn specialty_options(doctors: &[Doctor]) -> Vec<String> {
    doctors
        .iter()
        .flat_map(|d| d.specialties.iter())
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Type-ahead matches for the search box, drawn from the whole canonical set
/// regardless of the active filters.
pub fn suggestions(doctors: &[Doctor], input: &str) -> Vec<SearchSuggestion> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let folded = input.to_lowercase();
    doctors
        .iter()
        .filter(|d| d.name_contains(&folded))
        .take(MAX_SUGGESTIONS)
        .map(|d| SearchSuggestion {
            id: d.id.clone(),
            name: d.name.clone(),
        })
        .collect()
}
