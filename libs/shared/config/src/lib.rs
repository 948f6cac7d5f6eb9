use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_DOCTORS_SOURCE_URL: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub doctors_source_url: String,
    pub fetch_timeout_secs: u64,
    pub page_path: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            doctors_source_url: DEFAULT_DOCTORS_SOURCE_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            page_path: "/".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            doctors_source_url: env::var("DOCTORS_SOURCE_URL")
                .unwrap_or_else(|_| {
                    warn!("DOCTORS_SOURCE_URL not set, using default");
                    defaults.doctors_source_url.clone()
                }),
            fetch_timeout_secs: parse_or(
                "DOCTORS_FETCH_TIMEOUT_SECS",
                env::var("DOCTORS_FETCH_TIMEOUT_SECS").ok(),
                defaults.fetch_timeout_secs,
            ),
            page_path: env::var("DIRECTORY_PAGE_PATH")
                .unwrap_or_else(|_| defaults.page_path.clone()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| defaults.server_host.clone()),
            server_port: parse_or(
                "SERVER_PORT",
                env::var("SERVER_PORT").ok(),
                defaults.server_port,
            ),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - doctors source URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.doctors_source_url.is_empty()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", name, value);
            default
        }),
        None => default,
    }
}
