//! Tools backed by plain functions.
//!
//! A [`FunctionTool`] pairs a name and description with a synchronous
//! function taking a typed argument struct. The parameter schema advertised
//! to the planner is derived from that struct with `schemars`.

use crate::error::ToolError;
use crate::tool::{Tool, ToolFuture};
use core::marker::PhantomData;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use voyage_models::llm::ToolDefinition;

/// A [`Tool`] that deserializes its arguments into `P`, calls a function,
/// and serializes the returned record.
pub struct FunctionTool<P, R, F> {
    definition: ToolDefinition,
    func: F,
    _marker: PhantomData<fn(P) -> R>,
}

impl<P, R, F> FunctionTool<P, R, F>
where
    P: DeserializeOwned + JsonSchema,
    R: Serialize,
    F: Fn(P) -> Result<R, ToolError> + Send + Sync + 'static,
{
    /// Creates a tool named `name` that runs `func`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, func: F) -> Self {
        Self {
            definition: ToolDefinition {
                name: name.into(),
                description: description.into(),
                parameters: parameters_schema::<P>(),
            },
            func,
            _marker: PhantomData,
        }
    }

    fn call(&self, args: Value) -> Result<Value, ToolError> {
        let params: P = serde_json::from_value(args).map_err(|err| {
            ToolError::parameter_error(format!(
                "invalid arguments for '{}': {err}",
                self.definition.name
            ))
        })?;
        let output = (self.func)(params)?;
        Ok(serde_json::to_value(output)?)
    }
}

impl<P, R, F> Tool for FunctionTool<P, R, F>
where
    P: DeserializeOwned + JsonSchema + 'static,
    R: Serialize + 'static,
    F: Fn(P) -> Result<R, ToolError> + Send + Sync + 'static,
{
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    fn execute(&self, args: Value) -> ToolFuture<'_> {
        let result = self.call(args);
        Box::pin(async move { result })
    }
}

impl<P, R, F> core::fmt::Debug for FunctionTool<P, R, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.definition.name)
            .finish_non_exhaustive()
    }
}

/// Builds the object schema for an argument struct, without the root
/// `$schema` and `title` annotations.
fn parameters_schema<P: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(P);
    let mut value = serde_json::to_value(schema).unwrap_or_else(|_| empty_schema());
    match value.as_object_mut() {
        Some(object) => {
            object.remove("$schema");
            object.remove("title");
            value
        }
        None => empty_schema(),
    }
}

fn empty_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, JsonSchema)]
    struct LookupArgs {
        /// Location to look up.
        location: String,
        date: Option<String>,
    }

    fn lookup() -> FunctionTool<LookupArgs, Value, impl Fn(LookupArgs) -> Result<Value, ToolError>> {
        FunctionTool::new("lookup", "Look something up", |args: LookupArgs| {
            if args.location.is_empty() {
                return Err(ToolError::execution_error("location is empty"));
            }
            Ok(json!({"location": args.location, "date": args.date}))
        })
    }

    #[test]
    fn schema_lists_fields_and_required() {
        let def = lookup().definition();
        assert_eq!(def.name, "lookup");
        assert_eq!(def.parameters["type"], "object");
        assert!(def.parameters.get("$schema").is_none());
        assert_eq!(def.parameters["required"], json!(["location"]));
        assert!(def.parameters["properties"].get("date").is_some());
        assert_eq!(
            def.parameters["properties"]["location"]["description"],
            "Location to look up."
        );
    }

    #[tokio::test]
    async fn execute_serializes_output() {
        let result = lookup().execute(json!({"location": "Paris"})).await.unwrap();
        assert_eq!(result, json!({"location": "Paris", "date": null}));
    }

    #[tokio::test]
    async fn bad_arguments_are_parameter_errors() {
        let err = lookup().execute(json!({"date": "2024-06-01"})).await.unwrap_err();
        assert!(matches!(err, ToolError::ParameterError(ref msg) if msg.contains("lookup")));
    }

    #[tokio::test]
    async fn function_errors_pass_through() {
        let err = lookup().execute(json!({"location": ""})).await.unwrap_err();
        assert!(matches!(err, ToolError::ExecutionError(_)));
    }
}
