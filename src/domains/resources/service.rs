//! Resource service implementation.
//!
//! The ResourceService fronts both providers behind a single entry point.
//! `get` routes a named request to the provider whose descriptor set
//! contains the name; the MCP-facing views translate descriptors and
//! resolution results into rmcp resource models.
//!
//! The service holds no state beyond the immutable descriptor sets loaded
//! at construction; every call is an independent resolution.

use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource,
    ResourceContents, ResourceTemplate,
};
use tracing::info;

use super::descriptor::ParameterMap;
use super::error::ResourceError;
use super::functions::FunctionRegistry;
use super::http::{HttpClientConfig, HttpResourceProvider};
use super::private::PrivateResourceProvider;
use super::provider::{ResolvedResource, ResourceContent, ResourceProvider};
use super::template;
use crate::core::config::ResourcesConfig;

/// Service coordinating the HTTP and private resource providers.
#[derive(Debug, Clone)]
pub struct ResourceService {
    /// Provider for `public`-access descriptors.
    http: HttpResourceProvider,

    /// Provider for `mcp_server`-access descriptors.
    private: PrivateResourceProvider,
}

impl ResourceService {
    /// Create a new ResourceService from the resources configuration and
    /// the host-supplied function registry.
    pub fn new(
        config: &ResourcesConfig,
        http_client: &HttpClientConfig,
        functions: FunctionRegistry,
    ) -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let http = HttpResourceProvider::new(config.http_resources.clone(), http_client)?;
        let private = PrivateResourceProvider::new(config.private_resources.clone(), functions)?;

        Ok(Self { http, private })
    }

    /// Resolve a named resource with the supplied parameters.
    ///
    /// The HTTP set is consulted first; each provider enforces its own
    /// access class, so a descriptor listed under the wrong provider still
    /// fails with a not-found error.
    pub async fn get(
        &self,
        name: &str,
        parameters: &ParameterMap,
    ) -> Result<ResolvedResource, ResourceError> {
        if self.http.contains(name) {
            return self.http.get(name, parameters).await;
        }
        if self.private.contains(name) {
            return self.private.get(name, parameters).await;
        }
        Err(ResourceError::not_found(name))
    }

    /// List all non-parameterized descriptors as concrete MCP resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.all_descriptors()
            .filter(|d| !d.is_parameterized())
            .map(|d| {
                let mut raw = RawResource::new(d.uri.as_str(), d.name.as_str());
                raw.description = Some(d.description.clone());
                raw.mime_type = Some(d.mime_type().to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// List all parameterized descriptors as MCP resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.all_descriptors()
            .filter(|d| d.is_parameterized())
            .map(|d| {
                RawResourceTemplate {
                    uri_template: d.uri.clone(),
                    name: d.name.clone(),
                    title: None,
                    description: Some(d.description.clone()),
                    mime_type: Some(d.mime_type().to_string()),
                }
                .no_annotation()
            })
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// Exact match against non-parameterized descriptors first; otherwise
    /// parameterized templates are matched in declaration order and the
    /// recovered parameter values are validated like any other `get`.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let (name, parameters) = self
            .match_uri(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let resolved = self.get(&name, &parameters).await?;

        Ok(ReadResourceResult {
            contents: vec![into_contents(uri, resolved)],
        })
    }

    fn all_descriptors(&self) -> impl Iterator<Item = &super::descriptor::ResourceDescriptor> {
        self.http
            .descriptors()
            .into_iter()
            .chain(self.private.descriptors())
    }

    fn match_uri(&self, uri: &str) -> Option<(String, ParameterMap)> {
        for descriptor in self.all_descriptors() {
            if descriptor.is_parameterized() {
                if let Some(parameters) = template::match_uri(&descriptor.uri, uri) {
                    return Some((descriptor.name.clone(), parameters));
                }
            } else if descriptor.uri == uri {
                return Some((descriptor.name.clone(), ParameterMap::new()));
            }
        }
        None
    }
}

/// Translate a resolution result into MCP resource contents.
fn into_contents(uri: &str, resolved: ResolvedResource) -> ResourceContents {
    let mime_type = Some(resolved.kind.mime_type().to_string());
    match resolved.content {
        ResourceContent::Text(text) => ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type,
            text,
            meta: None,
        },
        ResourceContent::Binary(data) => ResourceContents::BlobResourceContents {
            uri: uri.to_string(),
            mime_type,
            blob: base64::Engine::encode(&base64::engine::general_purpose::STANDARD, data),
            meta: None,
        },
    }
}
