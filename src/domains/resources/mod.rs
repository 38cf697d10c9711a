//! Resources domain module.
//!
//! Resources are declarative descriptors mapping a name and optional
//! parameters to content: either a publicly fetchable HTTP URI or a
//! server-side function registered by the host application.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - descriptor model and the configuration shape
//! - `template.rs` - `{placeholder}` substitution and reverse matching
//! - `registry.rs` - validated, ordered name -> descriptor mapping
//! - `functions.rs` - explicit name -> callable registry
//! - `http.rs` / `private.rs` - the two providers, one per access class
//! - `service.rs` - routing and the MCP-facing views
//! - `samples.rs` - built-in example descriptor sets

pub mod descriptor;
mod error;
pub mod functions;
mod http;
mod private;
mod provider;
mod registry;
pub mod samples;
mod service;
pub mod template;

pub use descriptor::{
    AccessClass, AllowedValues, ContentKind, ParameterMap, ResourceDescriptor, ResourceParameter,
    ResourceSetConfig, ResourceSetParams, ValueKind,
};
pub use error::ResourceError;
pub use functions::{FunctionRegistry, ResourceFunction};
pub use http::{HttpClientConfig, HttpResourceProvider};
pub use private::PrivateResourceProvider;
pub use provider::{ResolvedResource, ResourceContent, ResourceProvider};
pub use registry::DescriptorRegistry;
pub use service::ResourceService;
