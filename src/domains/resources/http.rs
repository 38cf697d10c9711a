//! Public HTTP resource provider.
//!
//! Resolves descriptors with `access = public`: parameters are substituted
//! into the URI template and the result is fetched with a single GET.
//! One attempt, fail-fast; a non-success status is an error, not content.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::descriptor::{AccessClass, ParameterMap, ResourceDescriptor, ResourceSetConfig};
use super::error::ResourceError;
use super::provider::{ResolvedResource, ResourceContent, ResourceProvider};
use super::registry::DescriptorRegistry;

/// HTTP client settings for the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds. Bounds every fetch; there is no retry.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("resource-mcp-server/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Provider for `public`-access resources fetched over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpResourceProvider {
    registry: DescriptorRegistry,
    client: reqwest::Client,
}

impl HttpResourceProvider {
    /// Build a provider from a descriptor set configuration.
    ///
    /// Fails with a configuration error if the set is malformed or the
    /// HTTP client cannot be constructed.
    pub fn new(
        config: ResourceSetConfig,
        http: &HttpClientConfig,
    ) -> Result<Self, ResourceError> {
        let registry = DescriptorRegistry::from_config(config)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.clone())
            .build()
            .map_err(|e| {
                ResourceError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        info!(
            set = %registry.set_name(),
            resources = registry.len(),
            "HTTP resource provider initialized"
        );

        Ok(Self { registry, client })
    }

    fn descriptor(&self, name: &str) -> Result<&ResourceDescriptor, ResourceError> {
        self.registry
            .get(name)
            .filter(|d| d.access == AccessClass::Public)
            .ok_or_else(|| ResourceError::not_found(name))
    }

    async fn fetch(
        &self,
        descriptor: &ResourceDescriptor,
        url: &str,
    ) -> Result<ResourceContent, ResourceError> {
        debug!(resource = %descriptor.name, %url, "fetching public resource");

        let response = self.client.get(url).send().await.map_err(|e| {
            ResourceError::Fetch {
                uri: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::FetchStatus {
                uri: url.to_string(),
                status: status.as_u16(),
            });
        }

        if descriptor.kind.is_binary() {
            let bytes = response.bytes().await.map_err(|e| ResourceError::Fetch {
                uri: url.to_string(),
                source: e,
            })?;
            Ok(ResourceContent::Binary(bytes.to_vec()))
        } else {
            let text = response.text().await.map_err(|e| ResourceError::Fetch {
                uri: url.to_string(),
                source: e,
            })?;
            Ok(ResourceContent::Text(text))
        }
    }
}

#[async_trait]
impl ResourceProvider for HttpResourceProvider {
    fn set_name(&self) -> &str {
        self.registry.set_name()
    }

    fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn descriptors(&self) -> Vec<&ResourceDescriptor> {
        self.registry.iter().collect()
    }

    async fn get(
        &self,
        name: &str,
        parameters: &ParameterMap,
    ) -> Result<ResolvedResource, ResourceError> {
        let descriptor = self.descriptor(name)?;
        let url = descriptor.resolve_uri(parameters)?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ResourceError::invalid_uri(url));
        }

        let content = self.fetch(descriptor, &url).await?;
        Ok(ResolvedResource {
            content,
            kind: descriptor.kind,
        })
    }
}
