//! MCP Resource Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server whose resources
//! are driven entirely by configuration: descriptors map a name and optional
//! parameters to either a publicly fetchable HTTP URI or a server-side
//! function registered by the host application.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: descriptor model, URI templating, and the HTTP and
//!     private resource providers
//!
//! # Example
//!
//! ```rust,no_run
//! use resource_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     server.serve_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
