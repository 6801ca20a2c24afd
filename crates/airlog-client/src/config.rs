//! Client configuration.

use std::time::Duration;

/// Default Airflow webserver address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Basic auth credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        // Stock credentials of the official docker-compose deployment.
        Self {
            username: "airflow".to_string(),
            password: "airflow".to_string(),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Airflow webserver base URL, without the `/api/v1` suffix.
    pub base_url: String,

    /// Basic auth credentials.
    pub credentials: Credentials,

    /// Per-request timeout; transport default when unset.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timeout: None,
        }
    }
}
