//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating resource requests to the resources domain
//! service. The server advertises the resources capability only: resource
//! descriptors come from configuration, server-side functions from the
//! registry supplied at construction.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt, model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::resources::{FunctionRegistry, ResourceError, ResourceService};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and forwards
/// `resources/*` requests to the [`ResourceService`].
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and the
    /// built-in sample functions.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_functions(config, FunctionRegistry::with_samples())
    }

    /// Create a new MCP server with a host-supplied function registry.
    ///
    /// Fails fast if any configured descriptor set is invalid.
    pub fn with_functions(config: Config, functions: FunctionRegistry) -> Result<Self> {
        let resource_service =
            Arc::new(ResourceService::new(&config.resources, &config.http, functions)?);

        Ok(Self {
            config: Arc::new(config),
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the resource service.
    pub fn resources(&self) -> &Arc<ResourceService> {
        &self.resource_service
    }

    /// Run the server over the stdio transport.
    ///
    /// This method blocks until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| Error::internal(format!("failed to start stdio transport: {e}")))?;

        service
            .waiting()
            .await
            .map_err(|e| Error::internal(format!("stdio transport failed: {e}")))?;

        info!("STDIO transport finished");
        Ok(())
    }
}

/// Map a domain error to the matching MCP error code.
fn to_mcp_error(error: ResourceError) -> McpError {
    match &error {
        ResourceError::NotFound(_) => McpError::resource_not_found(error.to_string(), None),
        ResourceError::MissingParameter { .. }
        | ResourceError::InvalidParameterValue { .. } => {
            McpError::invalid_params(error.to_string(), None)
        }
        _ => McpError::internal_error(error.to_string(), None),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server provides configurable resources: public HTTP resources and \
                 private resources backed by server-side functions."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(to_mcp_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation_from_defaults() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "resource-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_rejects_invalid_descriptor_set() {
        let mut config = Config::default();
        config.resources.private_resources.params.resources[0].function = None;
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_capabilities_advertise_resources() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_none());
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let server = McpServer::new(Config::default()).unwrap();
        let err = server
            .resources()
            .read_resource("mcp://unknown")
            .await
            .unwrap_err();
        let mcp_error = to_mcp_error(err);
        assert!(mcp_error.message.contains("not found"));
    }
}
