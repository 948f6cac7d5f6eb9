// libs/doctor-cell/src/services/source.rs

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_http::JsonClient;

use crate::error::DirectoryError;
use crate::models::Doctor;
use crate::services::normalizer::normalize_all;

/// Where raw doctor records come from. Implementations return the records
/// untouched; normalization happens in [`fetch_doctors`].
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch_raw(&self) -> Result<Vec<Value>, DirectoryError>;
}

pub struct HttpDoctorSource {
    client: JsonClient,
    url: String,
}

impl HttpDoctorSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: JsonClient::new(config),
            url: config.doctors_source_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn fetch_raw(&self) -> Result<Vec<Value>, DirectoryError> {
        debug!("Fetching doctors from {}", self.url);

        let body: Value = self.client.get_json(&self.url).await?;

        match body {
            Value::Array(records) => Ok(records),
            other => Err(DirectoryError::Malformed(format!(
                "expected a JSON array of doctors, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Fixed, in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticDoctorSource {
    records: Vec<Value>,
}

impl StaticDoctorSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DoctorSource for StaticDoctorSource {
    async fn fetch_raw(&self) -> Result<Vec<Value>, DirectoryError> {
        Ok(self.records.clone())
    }
}

/// Fetch every raw record and normalize it, preserving source order.
pub async fn fetch_doctors<S>(source: &S) -> Result<Vec<Doctor>, DirectoryError>
where
    S: DoctorSource + ?Sized,
{
    let records = source.fetch_raw().await?;
    let doctors = normalize_all(&records);
    info!("Loaded {} doctors", doctors.len());
    Ok(doctors)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
