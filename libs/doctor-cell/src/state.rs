use tokio::sync::RwLock;
use tracing::info;

use shared_config::AppConfig;

use crate::services::catalog::Catalog;
use crate::services::directory::PageLocation;
use crate::services::source::{fetch_doctors, DoctorSource};

/// Shared handler state: configuration plus the canonical doctor set.
///
/// The catalog is written once per fetch and swapped whole under the lock;
/// handlers take a cheap clone and never hold the lock across their work.
pub struct DirectoryState {
    pub config: AppConfig,
    catalog: RwLock<Catalog>,
}

impl DirectoryState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, Catalog::pending())
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: RwLock::new(catalog),
        }
    }

    pub async fn catalog(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Fetch from `source` and swap the result in. The fetch runs without
    /// holding the lock, so readers keep seeing the previous catalog.
    pub async fn refresh<S>(&self, source: &S)
    where
        S: DoctorSource + ?Sized,
    {
        let outcome = fetch_doctors(source).await;
        let mut catalog = self.catalog.write().await;
        *catalog = std::mem::take(&mut *catalog).settle(outcome);
        info!(
            "Doctor catalog settled: {} doctors, error: {:?}",
            catalog.doctors().len(),
            catalog.error()
        );
    }

    pub fn location(&self, query: Option<&str>) -> PageLocation {
        PageLocation::new(self.config.page_path.clone(), query.unwrap_or_default())
    }
}
