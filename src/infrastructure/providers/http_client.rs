//! # HTTP Client Utilities
//!
//! Shared HTTP plumbing for live-provider adapters.
//!
//! A thin wrapper over `reqwest` with:
//! - Configurable per-request timeout
//! - JSON content negotiation on every request
//! - Mapping of transport/status/parse failures into [`ProviderError`]
//!
//! # Examples
//!
//! ```ignore
//! use fairfare::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let response: MyResponse = client.get("https://api.example.com/endpoint").await?;
//! ```

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
///
/// Declares a JSON `Accept` header on every request; `POST` bodies are
/// serialized as JSON, which also sets the content type.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Connection`] if the underlying client
    /// cannot be constructed.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                ProviderError::connection(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Timeout`]/[`ProviderError::Connection`]
    /// if the request fails, [`ProviderError::Status`] for non-success
    /// statuses, and [`ProviderError::Malformed`] if the body cannot be
    /// parsed.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        Self::handle_response(response).await
    }

    /// Makes a GET request with query parameters and deserializes the
    /// JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        Self::handle_response(response).await
    }

    /// Makes a POST request with a JSON body and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        Self::handle_response(response).await
    }

    /// Checks the status and deserializes the body.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ProviderError::malformed(format!("failed to parse response: {e}"))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ProviderError::status(status.as_u16(), body))
        }
    }

    /// Maps a reqwest error to a [`ProviderError`].
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::timeout_with_duration("request timed out", self.timeout_ms)
        } else if error.is_connect() {
            ProviderError::connection(format!("connection failed: {error}"))
        } else {
            ProviderError::connection(format!("HTTP request failed: {error}"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn client_is_cloneable() {
        let client = HttpClient::new(1000).unwrap();
        let clone = client.clone();
        assert_eq!(clone.timeout_ms(), 1000);
    }
}
