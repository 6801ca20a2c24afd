//! HTTP transport for the Airflow REST API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::ClientError;

/// Authenticated HTTP client rooted at an Airflow webserver.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: builder.build()?,
            base_url,
            credentials: config.credentials.clone(),
        })
    }

    /// Build a URL below the base, one path segment per element.
    ///
    /// Segments are percent-encoded, so ids containing `/` or spaces stay a
    /// single segment.
    pub fn url<I>(&self, segments: I) -> Result<Url, ClientError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a URL below `/api/v1`.
    pub fn api_url<I>(&self, segments: I) -> Result<Url, ClientError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let prefix = ["api", "v1"].map(String::from);
        self.url(
            prefix
                .into_iter()
                .chain(segments.into_iter().map(|s| s.as_ref().to_string())),
        )
    }

    async fn get(&self, url: &Url, accept: &str) -> Result<reqwest::Response, ClientError> {
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .get(url.clone())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(ACCEPT, accept)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Get JSON from an endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ClientError> {
        let body = self.get(url, "application/json").await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Get plain text from an endpoint.
    ///
    /// A JSON body of the form `{"content": "..."}` is unwrapped; any other
    /// non-text body, or a text body that is not valid UTF-8, is rejected.
    pub async fn get_text(&self, url: &Url) -> Result<String, ClientError> {
        let response = self.get(url, "text/plain").await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.is_empty() || content_type.starts_with("text/") {
            let body = response.bytes().await?;
            return String::from_utf8(body.to_vec())
                .map_err(|_| ClientError::NonTextBody(format!("{} (not UTF-8)", content_type)));
        }

        if content_type.starts_with("application/json") {
            warn!(url = %url, "Server ignored Accept: text/plain, unwrapping JSON log body");
            let value: serde_json::Value =
                response.json().await.map_err(|e| ClientError::Decode {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            return value
                .get("content")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
                .ok_or(ClientError::NonTextBody(content_type));
        }

        Err(ClientError::NonTextBody(content_type))
    }
}
