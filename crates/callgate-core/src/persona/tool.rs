//! Tool declarations and invocations.
//!
//! Tools are the only channel through which the response engine mutates
//! session state or triggers a transition. The controller declares them
//! per active persona; the engine calls back with typed arguments.

use serde::{Deserialize, Serialize};

/// A callable tool declared to the response engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Tool name, unique within the active persona
    pub name: String,
    /// Natural-language description shown to the engine
    pub description: String,
    /// JSON schema for the tool's parameters
    pub parameters: serde_json::Value,
}

impl ToolSpec {
    /// Declares a tool that takes no parameters.
    pub fn no_params(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::json!({ "type": "object", "properties": {} }),
        }
    }
}

/// A tool invocation issued by the response engine.
///
/// Argument types are validated against the declared schema by the engine
/// before reaching the controller; handlers do not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// An invocation with no arguments.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, serde_json::json!({}))
    }

    /// Reads a string argument by key.
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|value| value.as_str())
    }

    /// Reads an unsigned integer argument by key.
    pub fn u64_arg(&self, key: &str) -> Option<u64> {
        self.arguments.get(key).and_then(|value| value.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_params_tool_has_empty_object_schema() {
        let tool = ToolSpec::no_params("end_call", "End the call.");
        assert_eq!(tool.parameters["type"], "object");
        assert!(tool.parameters["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_argument_accessors() {
        let call = ToolCall::new("record_name", json!({ "name": "Ana", "age": 30 }));
        assert_eq!(call.str_arg("name"), Some("Ana"));
        assert_eq!(call.u64_arg("age"), Some(30));
        assert_eq!(call.str_arg("missing"), None);
    }
}
