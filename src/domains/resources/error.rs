//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// Configuration errors are raised eagerly when a provider is constructed;
/// everything else surfaces from individual `get` calls. There is no retry
/// or recovery at this layer.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The descriptor set failed shape validation at load time.
    #[error("Invalid resource configuration: {0}")]
    Configuration(String),

    /// No descriptor with the requested name (or the wrong access class
    /// for the provider that was asked).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A declared parameter was not supplied by the caller.
    #[error("Missing required parameter '{parameter}'")]
    MissingParameter { parameter: String },

    /// A supplied value is outside the parameter's allowed set.
    #[error("Invalid value '{value}' for parameter '{parameter}' (allowed: {allowed:?})")]
    InvalidParameterValue {
        parameter: String,
        value: String,
        allowed: Vec<String>,
    },

    /// A server-side descriptor names a function that is not registered.
    #[error("Function '{function}' for resource '{resource}' is not registered")]
    FunctionNotFound { resource: String, function: String },

    /// A registered function returned an error.
    #[error("Function '{function}' for resource '{resource}' failed: {source}")]
    FunctionExecution {
        resource: String,
        function: String,
        #[source]
        source: anyhow::Error,
    },

    /// The substituted URI is not fetchable over public HTTP.
    #[error("Invalid URI for public resource: {0}")]
    InvalidUri(String),

    /// The HTTP transport failed before a response was received.
    #[error("Fetching '{uri}' failed: {source}")]
    Fetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("Fetching '{uri}' failed with HTTP status {status}")]
    FetchStatus { uri: String, status: u16 },
}

impl ResourceError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_names_the_parameter() {
        let err = ResourceError::missing_parameter("client");
        assert!(err.to_string().contains("'client'"));
    }

    #[test]
    fn test_fetch_status_carries_the_code() {
        let err = ResourceError::FetchStatus {
            uri: "https://example.com/data".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));
    }
}
