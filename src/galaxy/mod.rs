//! Ansible Galaxy search API adapter
//!
//! This module provides:
//! - HTTP client shared foundation with fixed timeout and User-Agent
//! - The role search endpoint adapter returning raw catalog entries
//!
//! Search endpoint: `GET {base_url}/api/v1/search/roles/?keywords={keyword}`.
//! One outbound call per search, no caching, no retries. The returned entries
//! preserve registry order; version ordering inside an entry is left exactly
//! as the registry sent it, picking the latest is the resolver's job.

mod client;

pub use client::HttpClient;

use crate::error::RegistryError;
use async_trait::async_trait;
use serde::Deserialize;

/// URL of the upstream Ansible Galaxy server managed by Red Hat
pub const DEFAULT_GALAXY_URL: &str = "https://galaxy.ansible.com";

/// Path of the role search endpoint
const SEARCH_PATH: &str = "/api/v1/search/roles/";

/// One candidate match returned by the registry search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Namespace the role is published under
    pub namespace: String,
    /// Known version names, in registry order (newest first by Galaxy's
    /// own convention)
    pub versions: Vec<String>,
}

/// Trait for role catalog lookups
///
/// The resolver depends on this seam rather than on the concrete HTTP
/// client, so tests can substitute canned catalogs.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    /// Search the catalog for entries matching the keyword
    async fn search(&self, keyword: &str) -> Result<Vec<CatalogEntry>, RegistryError>;
}

/// Ansible Galaxy search client
pub struct GalaxyClient {
    client: HttpClient,
    base_url: String,
}

/// Galaxy search response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// One result entry in the search response
#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    summary_fields: SummaryFields,
}

/// The summary_fields block carrying versions and namespace
#[derive(Debug, Default, Deserialize)]
struct SummaryFields {
    #[serde(default)]
    versions: Vec<VersionName>,
    #[serde(default)]
    namespace: NamespaceName,
}

/// A named version entry
#[derive(Debug, Deserialize)]
struct VersionName {
    name: String,
}

/// A named namespace entry
#[derive(Debug, Default, Deserialize)]
struct NamespaceName {
    #[serde(default)]
    name: String,
}

impl GalaxyClient {
    /// Create a client against the public Ansible Galaxy server
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_GALAXY_URL)
    }

    /// Create a client against a custom Galaxy server
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Build the search endpoint URL
    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl RoleCatalog for GalaxyClient {
    async fn search(&self, keyword: &str) -> Result<Vec<CatalogEntry>, RegistryError> {
        let response: SearchResponse = self
            .client
            .get_json(&self.search_url(), &[("keywords", keyword)], keyword)
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(|result| CatalogEntry {
                namespace: result.summary_fields.namespace.name,
                versions: result
                    .summary_fields
                    .versions
                    .into_iter()
                    .map(|v| v.name)
                    .collect(),
            })
            .collect())
    }
}
