//! Function call requests.

use crate::error::ToolError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A function call request with name and JSON parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Parameters as a JSON object map.
    pub parameters: Map<String, Value>,
}

impl FunctionCall {
    /// Creates a new function call.
    pub fn new(name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Creates a function call from a [`serde_json::Value`], returning an error
    /// if `parameters` is not a JSON object.
    pub fn from_value(name: impl Into<String>, parameters: Value) -> Result<Self, ToolError> {
        match parameters {
            Value::Object(map) => Ok(Self::new(name, map)),
            _ => Err(ToolError::parameter_error("Parameters must be an object")),
        }
    }

    /// Returns the parameters as a JSON object value.
    #[must_use]
    pub fn arguments(&self) -> Value {
        Value::Object(self.parameters.clone())
    }

    /// Deserializes a required parameter by name.
    pub fn get_param<T: DeserializeOwned>(&self, name: &str) -> Result<T, ToolError> {
        let value = self
            .parameters
            .get(name)
            .ok_or_else(|| ToolError::parameter_error(format!("Missing parameter: {name}")))?;

        serde_json::from_value(value.clone()).map_err(|err| {
            ToolError::parameter_error(format!("Failed to deserialize parameter '{name}': {err}"))
        })
    }

    /// Deserializes an optional parameter by name. Returns `None` if missing or null.
    pub fn get_optional_param<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, ToolError> {
        match self.parameters.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| {
                    ToolError::parameter_error(format!(
                        "Failed to deserialize parameter '{name}': {err}"
                    ))
                }),
        }
    }
}

impl core::fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.name, Value::Object(self.parameters.clone()))
    }
}
