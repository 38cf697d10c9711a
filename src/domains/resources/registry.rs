//! Descriptor registry - parsed, validated descriptor sets.
//!
//! A registry is built once from a [`ResourceSetConfig`] when a provider is
//! constructed and is read-only afterwards. All shape and invariant
//! violations are reported eagerly as configuration errors so that a
//! misconfigured provider fails at startup rather than at first use.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use super::descriptor::{AccessClass, ResourceDescriptor, ResourceSetConfig};
use super::error::ResourceError;
use super::template;

/// Ordered mapping from resource name to validated descriptor.
#[derive(Debug, Clone)]
pub struct DescriptorRegistry {
    /// Name of the descriptor set this registry was built from.
    set_name: String,

    /// Descriptors keyed by name, in declaration order.
    descriptors: IndexMap<String, ResourceDescriptor>,
}

impl DescriptorRegistry {
    /// Build a registry from a parsed set configuration.
    pub fn from_config(config: ResourceSetConfig) -> Result<Self, ResourceError> {
        let mut descriptors = IndexMap::with_capacity(config.params.resources.len());

        for descriptor in config.params.resources {
            validate_descriptor(&config.name, &descriptor)?;
            let name = descriptor.name.clone();
            if descriptors.insert(name.clone(), descriptor).is_some() {
                return Err(ResourceError::configuration(format!(
                    "duplicate resource name '{name}' in set '{}'",
                    config.name
                )));
            }
        }

        Ok(Self {
            set_name: config.name,
            descriptors,
        })
    }

    /// Build a registry from an already-loaded JSON configuration value.
    pub fn from_value(value: Value) -> Result<Self, ResourceError> {
        Self::from_config(ResourceSetConfig::from_value(value)?)
    }

    /// Name of the underlying descriptor set.
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// Look up a descriptor by resource name.
    pub fn get(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.descriptors.get(name)
    }

    /// Whether a descriptor with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceDescriptor> {
        self.descriptors.values()
    }

    /// Number of descriptors in the set.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Check a single descriptor against the load-time invariants.
fn validate_descriptor(set: &str, descriptor: &ResourceDescriptor) -> Result<(), ResourceError> {
    if descriptor.name.is_empty() {
        return Err(ResourceError::configuration(format!(
            "descriptor with empty name in set '{set}'"
        )));
    }

    match descriptor.access {
        AccessClass::McpServer => {
            if descriptor.function.is_none() {
                return Err(ResourceError::configuration(format!(
                    "resource '{}' has access 'mcp_server' but no function",
                    descriptor.name
                )));
            }
        }
        AccessClass::Public => {
            if descriptor.function.is_some() {
                warn!(
                    resource = %descriptor.name,
                    "'function' is ignored for public resources"
                );
            }
        }
    }

    let declared: Vec<&str> = descriptor
        .resource_parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    for (index, parameter) in descriptor.resource_parameters.iter().enumerate() {
        if declared[..index].contains(&parameter.name.as_str()) {
            return Err(ResourceError::configuration(format!(
                "resource '{}' declares parameter '{}' twice",
                descriptor.name, parameter.name
            )));
        }
    }

    let placeholders = template::placeholders(&descriptor.uri);

    for placeholder in &placeholders {
        if !declared.contains(placeholder) {
            return Err(ResourceError::configuration(format!(
                "resource '{}' uses placeholder '{{{placeholder}}}' with no matching parameter declaration",
                descriptor.name
            )));
        }
    }

    for name in &declared {
        if !placeholders.contains(name) {
            warn!(
                resource = %descriptor.name,
                parameter = %name,
                "declared parameter does not appear in the URI template"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_set() -> Value {
        json!({
            "name": "http_resources",
            "description": "Public HTTP resources",
            "params": {
                "resources": [
                    {
                        "name": "sample_page",
                        "description": "A sample page",
                        "type": "html",
                        "access": "public",
                        "uri": "https://example.com/"
                    },
                    {
                        "name": "client_data",
                        "description": "Per-client data",
                        "type": "csv",
                        "access": "public",
                        "uri": "https://example.com/sampledata/{client}/data.csv",
                        "resource_parameters": [
                            {"name": "client", "description": "Client id", "allowed_values": ["acme", "globex"]}
                        ]
                    }
                ]
            }
        })
    }

    #[test]
    fn test_registry_preserves_declaration_order() {
        let registry = DescriptorRegistry::from_value(sample_set()).unwrap();
        let names: Vec<_> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["sample_page", "client_data"]);
        assert_eq!(registry.set_name(), "http_resources");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = DescriptorRegistry::from_value(sample_set()).unwrap();
        assert!(registry.contains("sample_page"));
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_registry_is_deterministic() {
        // Two registries from the same configuration resolve identically.
        let first = DescriptorRegistry::from_value(sample_set()).unwrap();
        let second = DescriptorRegistry::from_value(sample_set()).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = DescriptorRegistry::from_value(json!({
            "name": "http_resources",
            "params": {
                "resources": [
                    {"name": "page", "type": "html", "access": "public", "uri": "https://example.com/a"},
                    {"name": "page", "type": "html", "access": "public", "uri": "https://example.com/b"}
                ]
            }
        }));
        match result {
            Err(ResourceError::Configuration(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_mcp_server_requires_function() {
        let result = DescriptorRegistry::from_value(json!({
            "name": "private_resources",
            "params": {
                "resources": [
                    {"name": "profile", "type": "txt", "access": "mcp_server", "uri": "//profile/"}
                ]
            }
        }));
        match result {
            Err(ResourceError::Configuration(msg)) => assert!(msg.contains("function")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_undeclared_placeholder_rejected() {
        let result = DescriptorRegistry::from_value(json!({
            "name": "http_resources",
            "params": {
                "resources": [
                    {"name": "data", "type": "csv", "access": "public", "uri": "https://example.com/{client}/"}
                ]
            }
        }));
        match result {
            Err(ResourceError::Configuration(msg)) => assert!(msg.contains("client")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unused_declaration_tolerated() {
        let registry = DescriptorRegistry::from_value(json!({
            "name": "http_resources",
            "params": {
                "resources": [{
                    "name": "page",
                    "type": "html",
                    "access": "public",
                    "uri": "https://example.com/",
                    "resource_parameters": [
                        {"name": "unused", "description": "", "allowed_values": "string"}
                    ]
                }]
            }
        }));
        assert!(registry.is_ok());
    }
}
