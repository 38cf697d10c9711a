//! Private (server-side) resource provider.
//!
//! Resolves descriptors with `access = mcp_server` by invoking a function
//! from the [`FunctionRegistry`]. The validated parameter mapping is passed
//! to the function directly; the URI of such descriptors is an identifier
//! only and is never fetched.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::descriptor::{AccessClass, ParameterMap, ResourceDescriptor, ResourceSetConfig};
use super::error::ResourceError;
use super::functions::FunctionRegistry;
use super::provider::{ResolvedResource, ResourceContent, ResourceProvider};
use super::registry::DescriptorRegistry;

/// Provider for `mcp_server`-access resources backed by local functions.
#[derive(Debug, Clone)]
pub struct PrivateResourceProvider {
    registry: DescriptorRegistry,
    functions: FunctionRegistry,
}

impl PrivateResourceProvider {
    /// Build a provider from a descriptor set configuration and the
    /// function registry supplied by the host application.
    ///
    /// Descriptors naming unregistered functions are accepted (the lookup
    /// fails at call time) but logged here so a misconfiguration is visible
    /// at startup.
    pub fn new(
        config: ResourceSetConfig,
        functions: FunctionRegistry,
    ) -> Result<Self, ResourceError> {
        let registry = DescriptorRegistry::from_config(config)?;

        for descriptor in registry.iter() {
            if descriptor.access != AccessClass::McpServer {
                continue;
            }
            if let Some(function) = &descriptor.function {
                if !functions.contains(function) {
                    warn!(
                        resource = %descriptor.name,
                        %function,
                        "descriptor names a function that is not registered"
                    );
                }
            }
        }

        info!(
            set = %registry.set_name(),
            resources = registry.len(),
            functions = functions.names().len(),
            "private resource provider initialized"
        );

        Ok(Self {
            registry,
            functions,
        })
    }

    fn descriptor(&self, name: &str) -> Result<&ResourceDescriptor, ResourceError> {
        self.registry
            .get(name)
            .filter(|d| d.access == AccessClass::McpServer)
            .ok_or_else(|| ResourceError::not_found(name))
    }

    /// Resolve a named resource synchronously.
    ///
    /// The registered function runs on the caller's thread; functions are
    /// expected to be quick content producers, not long-running jobs.
    pub fn get_sync(
        &self,
        name: &str,
        parameters: &ParameterMap,
    ) -> Result<ResolvedResource, ResourceError> {
        let descriptor = self.descriptor(name)?;
        let validated = descriptor.validated_parameters(parameters)?;

        // Registry validation guarantees the field is present for this
        // access class; treat absence as a configuration defect.
        let function_name = descriptor.function.as_deref().ok_or_else(|| {
            ResourceError::configuration(format!(
                "resource '{}' has no function configured",
                descriptor.name
            ))
        })?;

        debug!(resource = %descriptor.name, function = %function_name, "invoking resource function");

        let content = self
            .functions
            .call(function_name, &validated)
            .ok_or_else(|| ResourceError::FunctionNotFound {
                resource: descriptor.name.clone(),
                function: function_name.to_string(),
            })?
            .map_err(|e| ResourceError::FunctionExecution {
                resource: descriptor.name.clone(),
                function: function_name.to_string(),
                source: e,
            })?;

        Ok(ResolvedResource {
            content: ResourceContent::Text(content),
            kind: descriptor.kind,
        })
    }
}

#[async_trait]
impl ResourceProvider for PrivateResourceProvider {
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
        self.get_sync(name, parameters)
    }
}
