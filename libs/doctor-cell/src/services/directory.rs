// libs/doctor-cell/src/services/directory.rs

use tracing::debug;

use crate::models::{DirectoryView, Doctor, FilterState, FilterUpdate, SearchSuggestion};
use crate::services::catalog::Catalog;
use crate::services::codec;
use crate::services::engine;
use crate::services::source::{fetch_doctors, DoctorSource};

/// Receives the page URL every time the filters change.
pub trait History {
    fn push(&mut self, url: &str);
}

/// History kept in memory, newest entry last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedHistory {
    entries: Vec<String>,
}

impl RecordedHistory {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl History for RecordedHistory {
    fn push(&mut self, url: &str) {
        self.entries.push(url.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub path: String,
    pub query: String,
}

impl PageLocation {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            path: path.into(),
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Split `/path?query#fragment`; the fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Owns the canonical doctor set and the current filters for one page,
/// and keeps the derived list and the page URL in step with both.
///
/// Every mutation recomputes the derived list before returning.
pub struct DoctorDirectory<H: History> {
    location: PageLocation,
    history: H,
    catalog: Catalog,
    filters: FilterState,
    derived: Vec<Doctor>,
}

impl<H: History> DoctorDirectory<H> {
    /// Start a page from its URL. Filters come from the query string; the
    /// doctor set is empty and loading until [`load`](Self::load) runs.
    pub fn new(location: PageLocation, history: H) -> Self {
        Self::with_catalog(location, history, Catalog::pending())
    }

    /// Start a page against an already loaded (or failed) catalog.
    pub fn with_catalog(location: PageLocation, history: H, catalog: Catalog) -> Self {
        let filters = codec::decode(&location.query);
        let mut directory = Self {
            location,
            history,
            catalog,
            filters,
            derived: Vec::new(),
        };

        // Drop unrecognised or malformed parameters from the address bar.
        if codec::encode(&directory.filters) != directory.location.query {
            directory.sync_url();
        }
        directory.recompute();
        directory
    }

    /// Fetch and normalize the doctor set, then swap it in whole.
    pub async fn load<S>(&mut self, source: &S)
    where
        S: DoctorSource + ?Sized,
    {
        let outcome = fetch_doctors(source).await;
        let catalog = std::mem::take(&mut self.catalog).settle(outcome);
        self.replace_catalog(catalog);
    }

    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.recompute();
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        debug!("Updating filters: {:?}", update);
        self.filters.merge(update);
        self.recompute();
        self.sync_url();
    }

    /// Check or uncheck one specialty. Checking appends it (once);
    /// unchecking removes every occurrence.
    pub fn toggle_specialty(&mut self, specialty: &str, selected: bool) {
        let mut specialties = self.filters.specialties.clone();
        if selected {
            if !specialties.iter().any(|s| s == specialty) {
                specialties.push(specialty.to_string());
            }
        } else {
            specialties.retain(|s| s != specialty);
        }
        self.update_filters(FilterUpdate {
            specialties: Some(specialties),
            ..FilterUpdate::default()
        });
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.derived
    }

    pub fn all_doctors(&self) -> &[Doctor] {
        self.catalog.doctors()
    }

    pub fn loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.catalog.error()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn specialty_options(&self) -> &[String] {
        self.catalog.specialty_options()
    }

    pub fn suggestions(&self, input: &str) -> Vec<SearchSuggestion> {
        engine::suggestions(self.catalog.doctors(), input)
    }

    pub fn url(&self) -> String {
        self.location.href()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn summary(&self) -> String {
        if self.loading() {
            "Loading...".to_string()
        } else {
            format!("{} doctors found", self.derived.len())
        }
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView {
            doctors: self.derived.clone(),
            total: self.derived.len(),
            loading: self.loading(),
            error: self.error().map(str::to_string),
            filters: self.filters.clone(),
            specialty_options: self.specialty_options().to_vec(),
            sort_label: self.filters.sort_by.label().map(str::to_string),
            summary: self.summary(),
            url: self.url(),
        }
    }

    fn recompute(&mut self) {
        self.derived = engine::derive(self.catalog.doctors(), &self.filters);
    }

    fn sync_url(&mut self) {
        self.location.query = codec::encode(&self.filters);
        let href = self.location.href();
        debug!("Writing page URL {}", href);
        self.history.push(&href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::models::{ConsultationType, SortBy};
    use crate::services::source::StaticDoctorSource;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct FailingSource;

    #[async_trait]
    impl DoctorSource for FailingSource {
        async fn fetch_raw(&self) -> Result<Vec<Value>, DirectoryError> {
            Err(DirectoryError::Status { status: 404, body: "missing".to_string() })
        }
    }

    fn source() -> StaticDoctorSource {
        StaticDoctorSource::new(vec![
            json!({"id": "A", "name": "Dr. Anita", "fees": "500", "experience": "10 years",
                   "specialities": [{"name": "Cardiology"}], "video_consult": true}),
            json!({"id": "B", "name": "Dr. Bharat", "fees": "300", "experience": "20 years",
                   "specialities": [{"name": "Dermatology"}], "in_clinic": true}),
            json!({"id": "C", "name": "Dr. Chitra", "fees": "300", "experience": "5 years",
                   "specialities": [{"name": "Cardiology"}, {"name": "Dermatology"}],
                   "video_consult": true, "in_clinic": true}),
        ])
    }

    fn ids<H: History>(directory: &DoctorDirectory<H>) -> Vec<String> {
        directory.doctors().iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_location_parse_and_href() {
        let location = PageLocation::parse("/doctors?sortBy=fees#top");
        assert_eq!(location.path, "/doctors");
        assert_eq!(location.query, "sortBy=fees");
        assert_eq!(location.href(), "/doctors?sortBy=fees");

        assert_eq!(PageLocation::parse("/").href(), "/");
        assert_eq!(PageLocation::new("/", "?").href(), "/");
    }

    #[test]
    fn test_new_decodes_filters_and_starts_loading() {
        let directory = DoctorDirectory::new(
            PageLocation::parse("/?consultationType=video&sortBy=fees"),
            RecordedHistory::default(),
        );

        assert!(directory.loading());
        assert!(directory.doctors().is_empty());
        assert_eq!(directory.filters().consultation_type, ConsultationType::Video);
        assert_eq!(directory.filters().sort_by, SortBy::Fees);
        assert_eq!(directory.summary(), "Loading...");
        // Already canonical, so nothing was written.
        assert!(directory.history().entries().is_empty());
    }

    #[test]
    fn test_new_canonicalizes_invalid_params() {
        let directory = DoctorDirectory::new(
            PageLocation::parse("/?sortBy=rating&search=ann&utm=x"),
            RecordedHistory::default(),
        );

        assert_eq!(directory.url(), "/?search=ann");
        assert_eq!(directory.history().entries(), ["/?search=ann".to_string()]);
    }

    #[tokio::test]
    async fn test_load_then_filter_scenario() {
        let mut directory = DoctorDirectory::new(PageLocation::parse("/"), RecordedHistory::default());
        directory.load(&source()).await;

        assert!(!directory.loading());
        assert!(directory.error().is_none());
        assert_eq!(ids(&directory), vec!["A", "B", "C"]);
        assert_eq!(directory.specialty_options(), ["Cardiology".to_string(), "Dermatology".to_string()]);

        directory.update_filters(FilterUpdate::sort(SortBy::Fees));
        assert_eq!(ids(&directory), vec!["B", "C", "A"]);
        assert_eq!(directory.url(), "/?sortBy=fees");

        directory.update_filters(FilterUpdate::sort(SortBy::None));
        directory.update_filters(FilterUpdate::consultation(ConsultationType::Video));
        assert_eq!(ids(&directory), vec!["A", "C"]);

        directory.update_filters(FilterUpdate::consultation(ConsultationType::None));
        directory.update_filters(FilterUpdate::specialties(["Dermatology"]));
        assert_eq!(ids(&directory), vec!["B", "C"]);
        assert_eq!(directory.url(), "/?specialties=Dermatology");

        assert_eq!(
            directory.history().entries(),
            [
                "/?sortBy=fees".to_string(),
                "/".to_string(),
                "/?consultationType=video".to_string(),
                "/".to_string(),
                "/?specialties=Dermatology".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_filters_from_url_apply_after_load() {
        let mut directory = DoctorDirectory::new(
            PageLocation::parse("/?search=CHITRA"),
            RecordedHistory::default(),
        );
        directory.load(&source()).await;

        assert_eq!(ids(&directory), vec!["C"]);
        assert_eq!(directory.summary(), "1 doctors found");
        assert_eq!(directory.all_doctors().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absorbed() {
        let mut directory = DoctorDirectory::new(
            PageLocation::parse("/?sortBy=fees"),
            RecordedHistory::default(),
        );
        directory.load(&FailingSource).await;

        assert!(!directory.loading());
        assert_eq!(directory.error(), Some("Failed to fetch doctors (HTTP 404)"));
        assert!(directory.doctors().is_empty());

        // Filters stay usable against the empty set.
        directory.update_filters(FilterUpdate::search("x"));
        assert!(directory.doctors().is_empty());
        assert_eq!(directory.url(), "/?sortBy=fees&search=x");
    }

    #[tokio::test]
    async fn test_toggle_specialty() {
        let mut directory = DoctorDirectory::new(PageLocation::parse("/"), RecordedHistory::default());
        directory.load(&source()).await;

        directory.toggle_specialty("Cardiology", true);
        directory.toggle_specialty("Dermatology", true);
        directory.toggle_specialty("Cardiology", true);
        assert_eq!(directory.filters().specialties, vec!["Cardiology", "Dermatology"]);
        assert_eq!(directory.url(), "/?specialties=Cardiology%2CDermatology");

        directory.toggle_specialty("Cardiology", false);
        assert_eq!(directory.filters().specialties, vec!["Dermatology"]);
        assert_eq!(ids(&directory), vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_view_snapshot() {
        let mut directory = DoctorDirectory::new(
            PageLocation::parse("/find?sortBy=experience"),
            RecordedHistory::default(),
        );
        directory.load(&source()).await;

        let view = directory.view();
        assert_eq!(view.total, 3);
        assert_eq!(view.doctors[0].id, "B");
        assert_eq!(view.sort_label.as_deref(), Some("Experience (High to Low)"));
        assert_eq!(view.summary, "3 doctors found");
        assert_eq!(view.url, "/find?sortBy=experience");
        assert!(!view.loading);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn test_suggestions_ignore_filters() {
        let mut directory = DoctorDirectory::new(
            PageLocation::parse("/?consultationType=clinic"),
            RecordedHistory::default(),
        );
        directory.load(&source()).await;

        let names: Vec<_> = directory.suggestions("anita").into_iter().map(|s| s.id).collect();
        assert_eq!(names, vec!["A"]);
        assert!(directory.doctors().iter().all(|d| d.id != "A"));
    }
}
