//! Provider trait and resolution result types.
//!
//! Both access classes resolve to the same result shape: the raw content
//! plus the descriptor's declared content kind. The declared kind is
//! advisory and is not checked against what was actually produced.

use async_trait::async_trait;

use super::descriptor::{ContentKind, ParameterMap, ResourceDescriptor};
use super::error::ResourceError;

/// Content produced by a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContent {
    /// Text content.
    Text(String),

    /// Raw binary content.
    Binary(Vec<u8>),
}

impl ResourceContent {
    /// The content as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

/// A fully resolved resource: content paired with the declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub content: ResourceContent,
    pub kind: ContentKind,
}

/// Common interface of the HTTP and private resource providers.
///
/// Each `get` call is a stateless, independent resolution; providers hold
/// no state beyond their immutable descriptor set.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Name of the descriptor set this provider serves.
    fn set_name(&self) -> &str;

    /// Whether the provider's set contains a descriptor with this name,
    /// regardless of access class.
    fn contains(&self, name: &str) -> bool;

    /// Descriptors of this provider's set, in declaration order.
    fn descriptors(&self) -> Vec<&ResourceDescriptor>;

    /// Resolve a named resource with the supplied parameters.
    async fn get(
        &self,
        name: &str,
        parameters: &ParameterMap,
    ) -> Result<ResolvedResource, ResourceError>;
}
