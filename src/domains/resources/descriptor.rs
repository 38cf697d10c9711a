//! Resource descriptor model.
//!
//! Descriptors are declarative records mapping a resource name (plus
//! optional parameters) to either a publicly fetchable HTTP URI or a
//! server-side function. They are parsed once from configuration at
//! provider construction time and held read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::error::ResourceError;

/// Caller-supplied parameter values for a single `get` call.
pub type ParameterMap = BTreeMap<String, String>;

/// How a resource is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessClass {
    /// Fetched over public HTTP(S).
    Public,
    /// Produced by a function registered on the server.
    McpServer,
}

/// Declared content kind of a resource.
///
/// Advisory only: the kind selects the advertised MIME type and whether the
/// body is handled as text or bytes, but fetched content is never validated
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Csv,
    Txt,
    Json,
    Xml,
    Html,
    Pdf,
}

impl ContentKind {
    /// MIME type advertised to MCP clients for this kind.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Txt => "text/plain",
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Html => "text/html",
            Self::Pdf => "application/pdf",
        }
    }

    /// Whether response bodies of this kind are kept as raw bytes.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// Value constraint for a declared parameter.
///
/// Either a type sentinel (`"string"`, `"number"`, `"boolean"`) or an
/// explicit list of permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowedValues {
    Kind(ValueKind),
    OneOf(Vec<String>),
}

/// Type sentinel accepted in `allowed_values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
}

impl Default for AllowedValues {
    fn default() -> Self {
        Self::Kind(ValueKind::String)
    }
}

impl AllowedValues {
    /// Check a supplied value against this constraint.
    fn check(&self, parameter: &str, value: &str) -> Result<(), ResourceError> {
        match self {
            Self::Kind(ValueKind::String) => Ok(()),
            Self::Kind(ValueKind::Number) => {
                if value.parse::<f64>().is_ok() {
                    Ok(())
                } else {
                    Err(ResourceError::InvalidParameterValue {
                        parameter: parameter.to_string(),
                        value: value.to_string(),
                        allowed: vec!["number".to_string()],
                    })
                }
            }
            Self::Kind(ValueKind::Boolean) => {
                if matches!(value, "true" | "false") {
                    Ok(())
                } else {
                    Err(ResourceError::InvalidParameterValue {
                        parameter: parameter.to_string(),
                        value: value.to_string(),
                        allowed: vec!["true".to_string(), "false".to_string()],
                    })
                }
            }
            Self::OneOf(values) => {
                if values.iter().any(|v| v == value) {
                    Ok(())
                } else {
                    Err(ResourceError::InvalidParameterValue {
                        parameter: parameter.to_string(),
                        value: value.to_string(),
                        allowed: values.clone(),
                    })
                }
            }
        }
    }

    /// JSON schema fragment for this constraint.
    fn schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        match self {
            Self::Kind(ValueKind::String) => {
                schema.insert("type".to_string(), json!("string"));
            }
            Self::Kind(ValueKind::Number) => {
                schema.insert("type".to_string(), json!("number"));
            }
            Self::Kind(ValueKind::Boolean) => {
                schema.insert("type".to_string(), json!("boolean"));
            }
            Self::OneOf(values) => {
                schema.insert("type".to_string(), json!("string"));
                schema.insert("enum".to_string(), json!(values));
            }
        }
        schema
    }
}

/// Declaration of a single resource parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceParameter {
    /// Parameter name; must match a `{name}` placeholder in the owning
    /// descriptor's URI.
    pub name: String,

    /// Human-readable description, no behavioral effect.
    #[serde(default)]
    pub description: String,

    /// Constraint on the supplied value.
    #[serde(default)]
    pub allowed_values: AllowedValues,
}

/// A named, typed, access-scoped resource declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Unique name within the owning descriptor set.
    pub name: String,

    /// Human-readable description, no behavioral effect.
    #[serde(default)]
    pub description: String,

    /// Declared content kind.
    #[serde(rename = "type")]
    pub kind: ContentKind,

    /// Which provider logic applies.
    pub access: AccessClass,

    /// URI, possibly containing `{placeholder}` tokens.
    pub uri: String,

    /// Registered function name; required iff `access` is `mcp_server`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub resource_parameters: Vec<ResourceParameter>,
}

impl ResourceDescriptor {
    /// MIME type advertised for this descriptor.
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    /// Whether this descriptor declares any parameters.
    pub fn is_parameterized(&self) -> bool {
        !self.resource_parameters.is_empty()
    }

    /// Validate caller-supplied parameters against the declarations.
    ///
    /// Every declared parameter is required; supplied values must satisfy
    /// the declared constraint. Returns the validated mapping for handing
    /// to a substitution or a server-side function.
    pub fn validated_parameters(
        &self,
        supplied: &ParameterMap,
    ) -> Result<ParameterMap, ResourceError> {
        for declaration in &self.resource_parameters {
            let value = supplied
                .get(&declaration.name)
                .ok_or_else(|| ResourceError::missing_parameter(&declaration.name))?;
            declaration.allowed_values.check(&declaration.name, value)?;
        }
        Ok(supplied.clone())
    }

    /// Resolve the URI template with the supplied parameters.
    pub fn resolve_uri(&self, supplied: &ParameterMap) -> Result<String, ResourceError> {
        let validated = self.validated_parameters(supplied)?;
        super::template::substitute(&self.uri, &validated)
    }

    /// JSON schema describing the declared parameters.
    ///
    /// Every declared parameter is listed as required.
    pub fn parameter_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for declaration in &self.resource_parameters {
            let mut schema = declaration.allowed_values.schema();
            schema.insert("description".to_string(), json!(declaration.description));
            properties.insert(declaration.name.clone(), Value::Object(schema));
            required.push(declaration.name.clone());
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Configuration object declaring a named set of resources.
///
/// This is the construction input for a provider:
/// `{ "name": ..., "params": { "resources": [...] } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSetConfig {
    /// Name of the descriptor set.
    pub name: String,

    /// Human-readable description of the set.
    #[serde(default)]
    pub description: String,

    /// Nested parameter block holding the descriptor records.
    pub params: ResourceSetParams,
}

/// The `params` block of a [`ResourceSetConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSetParams {
    /// Descriptor records, in declaration order.
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
}

impl ResourceSetConfig {
    /// Parse a set configuration from an already-loaded JSON value.
    ///
    /// Shape errors surface as [`ResourceError::Configuration`].
    pub fn from_value(value: Value) -> Result<Self, ResourceError> {
        serde_json::from_value(value)
            .map_err(|e| ResourceError::configuration(format!("bad descriptor shape: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_descriptor() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "client_data".to_string(),
            description: "Per-client sample data".to_string(),
            kind: ContentKind::Csv,
            access: AccessClass::Public,
            uri: "//sampledata/{client}/".to_string(),
            function: None,
            resource_parameters: vec![ResourceParameter {
                name: "client".to_string(),
                description: "Client identifier".to_string(),
                allowed_values: AllowedValues::OneOf(vec![
                    "acme".to_string(),
                    "globex".to_string(),
                ]),
            }],
        }
    }

    #[test]
    fn test_descriptor_round_trip() {
        let descriptor = sample_descriptor();
        let value = serde_json::to_value(&descriptor).unwrap();
        let back: ResourceDescriptor = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(descriptor, back);

        // Wire field names match the configuration shape.
        assert_eq!(value["type"], "csv");
        assert_eq!(value["access"], "public");
        assert!(value.get("function").is_none());
    }

    #[test]
    fn test_access_class_wire_names() {
        let access: AccessClass = serde_json::from_value(json!("mcp_server")).unwrap();
        assert_eq!(access, AccessClass::McpServer);
        assert!(serde_json::from_value::<AccessClass>(json!("private")).is_err());
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ContentKind::Csv.mime_type(), "text/csv");
        assert_eq!(ContentKind::Json.mime_type(), "application/json");
        assert_eq!(ContentKind::Pdf.mime_type(), "application/pdf");
        assert!(ContentKind::Pdf.is_binary());
        assert!(!ContentKind::Html.is_binary());
    }

    #[test]
    fn test_allowed_values_forms() {
        let any: AllowedValues = serde_json::from_value(json!("string")).unwrap();
        assert_eq!(any, AllowedValues::Kind(ValueKind::String));

        let set: AllowedValues = serde_json::from_value(json!(["acme", "globex"])).unwrap();
        assert_eq!(
            set,
            AllowedValues::OneOf(vec!["acme".to_string(), "globex".to_string()])
        );

        assert!(serde_json::from_value::<AllowedValues>(json!("integer")).is_err());
    }

    #[test]
    fn test_validated_parameters_accepts_member_value() {
        let descriptor = sample_descriptor();
        let mut params = ParameterMap::new();
        params.insert("client".to_string(), "acme".to_string());
        assert!(descriptor.validated_parameters(&params).is_ok());
    }

    #[test]
    fn test_validated_parameters_rejects_outside_value() {
        let descriptor = sample_descriptor();
        let mut params = ParameterMap::new();
        params.insert("client".to_string(), "other".to_string());
        let err = descriptor.validated_parameters(&params).unwrap_err();
        match err {
            ResourceError::InvalidParameterValue { value, allowed, .. } => {
                assert_eq!(value, "other");
                assert_eq!(allowed, vec!["acme".to_string(), "globex".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validated_parameters_reports_missing() {
        let descriptor = sample_descriptor();
        let err = descriptor
            .validated_parameters(&ParameterMap::new())
            .unwrap_err();
        match err {
            ResourceError::MissingParameter { parameter } => assert_eq!(parameter, "client"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_number_and_boolean_sentinels() {
        let number = AllowedValues::Kind(ValueKind::Number);
        assert!(number.check("limit", "42").is_ok());
        assert!(number.check("limit", "4.5").is_ok());
        assert!(number.check("limit", "many").is_err());

        let boolean = AllowedValues::Kind(ValueKind::Boolean);
        assert!(boolean.check("verbose", "true").is_ok());
        assert!(boolean.check("verbose", "yes").is_err());
    }

    #[test]
    fn test_parameter_schema_shape() {
        let schema = sample_descriptor().parameter_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["client"]));
        assert_eq!(schema["properties"]["client"]["type"], "string");
        assert_eq!(schema["properties"]["client"]["enum"], json!(["acme", "globex"]));
    }

    #[test]
    fn test_set_config_from_value() {
        let config = ResourceSetConfig::from_value(json!({
            "name": "http_resources",
            "description": "Public HTTP resources",
            "params": {
                "resources": [{
                    "name": "sample_page",
                    "description": "A sample page",
                    "type": "html",
                    "access": "public",
                    "uri": "https://example.com/"
                }]
            }
        }))
        .unwrap();

        assert_eq!(config.params.resources.len(), 1);
        assert_eq!(config.params.resources[0].kind, ContentKind::Html);
    }

    #[test]
    fn test_set_config_rejects_unknown_type() {
        let result = ResourceSetConfig::from_value(json!({
            "name": "http_resources",
            "params": {
                "resources": [{
                    "name": "bad",
                    "type": "yaml",
                    "access": "public",
                    "uri": "https://example.com/"
                }]
            }
        }));
        assert!(matches!(result, Err(ResourceError::Configuration(_))));
    }
}
