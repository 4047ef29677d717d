//! HTTP client shared foundation
//!
//! A thin wrapper over reqwest carrying the fixed client identification and
//! the per-request timeout. Every call is a single attempt: a failed or timed
//! out request fails the lookup for that role, no retries.

use crate::error::RegistryError;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout applied to every registry request (10 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed User-Agent header sent on every request
const USER_AGENT: &str = "ansible-requirements-lint";

/// HTTP client wrapper for registry queries
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                RegistryError::network("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and decode the JSON response
    ///
    /// `role` is only used as error context. Transport failures map to
    /// Network/Timeout, non-success statuses to UnexpectedStatus, and an
    /// undecodable body to InvalidResponse.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        role: &str,
    ) -> Result<T, RegistryError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RegistryError::timeout(role)
                } else {
                    RegistryError::network(role, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::unexpected_status(role, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RegistryError::invalid_response(role, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_timeout() {
        let client = HttpClient::with_timeout(Duration::from_secs(2));
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(10));
        assert_eq!(USER_AGENT, "ansible-requirements-lint");
    }

    #[tokio::test]
    async fn test_get_json_connection_error_maps_to_network() {
        let client = HttpClient::new().unwrap();
        // Port 1 is never listening
        let err = client
            .get_json::<serde_json::Value>("http://127.0.0.1:1/", &[], "ns.role")
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
