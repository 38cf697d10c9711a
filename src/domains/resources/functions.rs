//! Server-side function registry.
//!
//! Resources with `access = mcp_server` name a function instead of a
//! fetchable URI. Functions are registered here explicitly by the host
//! application at construction time and looked up by name when a resource
//! is resolved. There is no reflection; a name that was never registered
//! simply fails the lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::descriptor::ParameterMap;

/// A registered server-side callable.
///
/// Receives the validated parameter mapping and returns the resource
/// content as text. Errors are opaque to the registry and wrap into
/// `ResourceError::FunctionExecution` at the call site.
pub type ResourceFunction = Arc<dyn Fn(&ParameterMap) -> anyhow::Result<String> + Send + Sync>;

/// Registry of named server-side functions.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, ResourceFunction>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in sample functions.
    pub fn with_samples() -> Self {
        let mut registry = Self::new();
        registry.register("sample_parameterized_resource", |params| {
            Ok(sample_parameterized_resource(params))
        });
        registry
    }

    /// Register a function under the given name.
    ///
    /// Re-registering a name replaces the previous function.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&ParameterMap) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
    }

    /// Invoke a registered function by name.
    ///
    /// Returns `None` if no function with this name is registered; the
    /// inner result is whatever the function produced.
    pub fn call(&self, name: &str, parameters: &ParameterMap) -> Option<anyhow::Result<String>> {
        let function = self.functions.get(name)?;
        Some(function.as_ref()(parameters))
    }

    /// Whether a function with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names, unordered.
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

/// Sample parameterized resource function.
///
/// Returns different text based on the `client` parameter.
fn sample_parameterized_resource(parameters: &ParameterMap) -> String {
    let client = parameters
        .get("client")
        .map(|v| v.to_lowercase())
        .unwrap_or_default();

    match client.as_str() {
        "acme" => "This is the roadrunner client".to_string(),
        "bigrock" => "We make tools to smash birds".to_string(),
        other => format!("Unknown client: {other}. Available clients: acme, bigrock"),
    }
}
