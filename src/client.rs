//! Zephyr API HTTP client
//!
//! Thin wrapper around reqwest for the ZAPI REST endpoints: Basic
//! Authentication on every request, JSON bodies, uniform 2xx status
//! checking. One outbound call per invocation, no retries.

use crate::Result;
use crate::ZapiError;
use anyhow::Context;
use reqwest::{header, Client, Method};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client-level timeout covering connect + response
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);
/// Per-request timeout for create/update operations
const WRITE_TIMEOUT: Duration = Duration::from_secs(15);

/// Jira connection credentials
///
/// Opaque strings; validation checks presence only.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Jira base URL (e.g., <https://jira.example.com>)
    pub base_url: String,

    /// Jira username
    pub username: String,

    /// Jira password
    pub password: String,
}

impl Credentials {
    /// Create credentials from the raw CLI arguments
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check that every field is present
    ///
    /// # Errors
    ///
    /// Returns `ZapiError::Config` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ZapiError::Config("Base URL cannot be empty".to_string()));
        }
        if self.username.is_empty() {
            return Err(ZapiError::Config("Username cannot be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(ZapiError::Config("Password cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// ZAPI client for the Zephyr execution endpoints
pub struct ZapiClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ZapiClient {
    /// Create a new ZAPI client
    ///
    /// Validates the credentials and builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when a credential field is empty or the HTTP
    /// client cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self> {
        credentials.validate()?;

        if !credentials.base_url.starts_with("http://")
            && !credentials.base_url.starts_with("https://")
        {
            warn!(base_url = %credentials.base_url, "Base URL does not start with http:// or https://");
        }

        let client = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .context("Failed to construct HTTP client")?;

        let base_url = credentials.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            username: credentials.username,
            password: credentials.password,
        })
    }

    /// The normalized base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a POST request to a ZAPI endpoint
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<String> {
        self.send(Method::POST, endpoint, body).await
    }

    /// Make a PUT request to a ZAPI endpoint
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<String> {
        self.send(Method::PUT, endpoint, body).await
    }

    /// Send one request and return the raw response text
    ///
    /// The body is serialized to JSON up front so it can be logged at
    /// debug level exactly as sent. Any status outside [200,300) is an
    /// error carrying the status code and response body.
    async fn send<B: Serialize>(&self, method: Method, endpoint: &str, body: &B) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let payload = serde_json::to_string(body)?;

        info!(method = %method, url = %url, "Sending ZAPI request");
        debug!(body = %payload, "Request body");

        let response = self
            .client
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.password))
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .timeout(WRITE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        info!(status = %status, "Response status");
        debug!(body = %text, "Response body");

        if status.is_success() {
            Ok(text)
        } else {
            Err(ZapiError::Api { status, body: text })
        }
    }
}
