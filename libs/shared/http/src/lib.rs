use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Request(e) if e.is_timeout())
    }
}

/// Plain JSON-over-HTTP client for read-only upstream sources.
pub struct JsonClient {
    client: Client,
    timeout: Duration,
}

impl JsonClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_timeout(config.fetch_timeout())
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Any non-2xx status is an error. The body is read as text first so a
    /// body that is not valid JSON surfaces as [`HttpError::Decode`] rather
    /// than a transport error.
    pub async fn get_json<T>(&self, url: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        debug!("Making request to {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.get_headers())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("API error ({}): {}", status, body);
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
