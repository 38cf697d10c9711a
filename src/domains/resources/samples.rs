//! Built-in sample descriptor sets.
//!
//! Used when no resources file is configured, so the server is usable out
//! of the box and the sample function wiring stays exercised.

use super::descriptor::{
    AccessClass, AllowedValues, ContentKind, ResourceDescriptor, ResourceParameter,
    ResourceSetConfig, ResourceSetParams,
};

/// Sample set of public HTTP resources.
pub fn http_resources() -> ResourceSetConfig {
    ResourceSetConfig {
        name: "http_resources".to_string(),
        description: "Public HTTP resource examples".to_string(),
        params: ResourceSetParams {
            resources: vec![
                ResourceDescriptor {
                    name: "example_page".to_string(),
                    description: "The example.com landing page".to_string(),
                    kind: ContentKind::Html,
                    access: AccessClass::Public,
                    uri: "https://example.com/".to_string(),
                    function: None,
                    resource_parameters: Vec::new(),
                },
                ResourceDescriptor {
                    name: "client_data".to_string(),
                    description: "Per-client sample data".to_string(),
                    kind: ContentKind::Csv,
                    access: AccessClass::Public,
                    uri: "https://example.com/sampledata/{client}/data.csv".to_string(),
                    function: None,
                    resource_parameters: vec![ResourceParameter {
                        name: "client".to_string(),
                        description: "Client identifier".to_string(),
                        allowed_values: AllowedValues::OneOf(vec![
                            "acme".to_string(),
                            "globex".to_string(),
                        ]),
                    }],
                },
            ],
        },
    }
}

/// Sample set of private, function-backed resources.
pub fn private_resources() -> ResourceSetConfig {
    ResourceSetConfig {
        name: "example_private_resources".to_string(),
        description: "Example private resource types".to_string(),
        params: ResourceSetParams {
            resources: vec![ResourceDescriptor {
                name: "client_profile".to_string(),
                description: "Client-specific text produced on the server".to_string(),
                kind: ContentKind::Txt,
                access: AccessClass::McpServer,
                uri: "//sampledata/{client}/".to_string(),
                function: Some("sample_parameterized_resource".to_string()),
                resource_parameters: vec![ResourceParameter {
                    name: "client".to_string(),
                    description: "Client identifier".to_string(),
                    // The function itself answers unknown clients, so any
                    // string is accepted here.
                    allowed_values: AllowedValues::default(),
                }],
            }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::registry::DescriptorRegistry;

    #[test]
    fn test_sample_sets_build_valid_registries() {
        assert_eq!(
            DescriptorRegistry::from_config(http_resources())
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            DescriptorRegistry::from_config(private_resources())
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_sample_sets_round_trip_through_json() {
        let value = serde_json::to_value(http_resources()).unwrap();
        let back = ResourceSetConfig::from_value(value).unwrap();
        assert_eq!(back, http_resources());
    }
}
