// libs/doctor-cell/src/services/catalog.rs

use std::sync::Arc;

use tracing::warn;

use crate::error::DirectoryError;
use crate::models::Doctor;
use crate::services::engine::specialty_options;

/// The canonical doctor set plus its load status.
///
/// The set is only ever swapped whole, so readers never see a partially
/// populated list. Clones share the underlying data.
#[derive(Debug, Clone)]
pub struct Catalog {
    doctors: Arc<[Doctor]>,
    specialty_options: Arc<[String]>,
    loading: bool,
    error: Option<String>,
}

impl Catalog {
    /// Nothing fetched yet.
    pub fn pending() -> Self {
        Self {
            doctors: Arc::from(Vec::new()),
            specialty_options: Arc::from(Vec::new()),
            loading: true,
            error: None,
        }
    }

    pub fn from_doctors(doctors: Vec<Doctor>) -> Self {
        Self::pending().settle(Ok(doctors))
    }

    /// Apply a fetch outcome. Success replaces the set and clears any
    /// previous error; failure keeps the current set and records the error.
    pub fn settle(self, outcome: Result<Vec<Doctor>, DirectoryError>) -> Self {
        match outcome {
            Ok(doctors) => Self {
                specialty_options: Arc::from(specialty_options(&doctors)),
                doctors: Arc::from(doctors),
                loading: false,
                error: None,
            },
            Err(err) => {
                warn!("Doctor fetch failed: {}", err);
                Self {
                    loading: false,
                    error: Some(err.to_string()),
                    ..self
                }
            }
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn specialty_options(&self) -> &[String] {
        &self.specialty_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::pending()
    }
}
