//! Integration tests for the `voyage_tools` crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use voyage_models::llm::ToolDefinition;
use voyage_tools::tool::ToolFuture;
use voyage_tools::{FunctionTool, Tool, ToolError, ToolRegistry, Toolset};

// ─────────────────────────────────────────────────────────────────────
// 1. Tool trait manual impl
// ─────────────────────────────────────────────────────────────────────

struct ManualTool;

impl Tool for ManualTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "manual_tool".to_string(),
            description: "A manually implemented tool.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "input": { "type": "string" }
                },
                "required": ["input"]
            }),
        }
    }

    fn execute(&self, args: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let input = args
                .get("input")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ToolError::parameter_error("Missing 'input'"))?;
            Ok(serde_json::json!({ "result": format!("echo: {input}") }))
        })
    }
}

#[tokio::test]
async fn manual_tool_definition_and_execute() {
    let tool = ManualTool;
    let def = tool.definition();
    assert_eq!(def.name, "manual_tool");
    assert_eq!(def.description, "A manually implemented tool.");

    let result = tool
        .execute(serde_json::json!({"input": "hello"}))
        .await
        .unwrap();
    assert_eq!(result["result"], "echo: hello");
}

// ─────────────────────────────────────────────────────────────────────
// 2. Function-backed tools
// ─────────────────────────────────────────────────────────────────────

#[derive(Deserialize, JsonSchema)]
struct PriceArgs {
    origin: String,
    destination: String,
}

#[derive(Serialize)]
struct PriceRecord {
    route: String,
    price: f64,
}

fn price_tool(name: &'static str) -> impl Tool {
    FunctionTool::new(name, "Quote a price", |args: PriceArgs| {
        Ok(PriceRecord {
            route: format!("{}-{}", args.origin, args.destination),
            price: 299.99,
        })
    })
}

#[tokio::test]
async fn function_tool_round_trips_through_registry() {
    let mut registry = ToolRegistry::new();
    registry.register(price_tool("quote")).unwrap();

    let result = registry
        .execute(
            "quote",
            serde_json::json!({"origin": "JFK", "destination": "LAX"}),
        )
        .await
        .unwrap();
    assert_eq!(result["route"], "JFK-LAX");
    assert_eq!(result["price"], 299.99);
}

#[tokio::test]
async fn function_tool_reports_missing_arguments() {
    let mut registry = ToolRegistry::new();
    registry.register(price_tool("quote")).unwrap();

    let err = registry
        .execute("quote", serde_json::json!({"origin": "JFK"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::ParameterError(_)));
}

// ─────────────────────────────────────────────────────────────────────
// 3. ToolRegistry
// ─────────────────────────────────────────────────────────────────────

#[test]
fn registry_register_has_names() {
    let mut registry = ToolRegistry::new();
    registry.register(ManualTool).unwrap();

    assert!(registry.has("manual_tool"));
    assert!(!registry.has("nonexistent"));
    assert_eq!(registry.names(), vec!["manual_tool"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn resolve_returns_the_registered_handler() {
    let shared: Arc<dyn Tool> = Arc::new(ManualTool);
    let mut registry = ToolRegistry::new();
    registry.register_shared(Arc::clone(&shared)).unwrap();

    let resolved = registry.resolve("manual_tool").unwrap();
    assert!(Arc::ptr_eq(&resolved, &shared));
}

#[test]
fn resolve_unknown_name_fails() {
    let registry = ToolRegistry::new();
    let err = registry.resolve("book_spaceship").err().unwrap();
    assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "book_spaceship"));
    assert!(err.is_unknown_tool());
}

#[test]
fn duplicate_registration_leaves_registry_unchanged() {
    let first: Arc<dyn Tool> = Arc::new(ManualTool);
    let mut registry = ToolRegistry::new();
    registry.register_shared(Arc::clone(&first)).unwrap();

    let err = registry.register(ManualTool).unwrap_err();
    assert!(matches!(err, ToolError::DuplicateTool(ref name) if name == "manual_tool"));
    assert_eq!(registry.len(), 1);
    assert!(Arc::ptr_eq(&registry.resolve("manual_tool").unwrap(), &first));
}

#[test]
fn describe_all_keeps_registration_order() {
    let mut registry = ToolRegistry::new();
    registry.register(price_tool("zeta")).unwrap();
    registry.register(ManualTool).unwrap();
    registry.register(price_tool("alpha")).unwrap();

    assert_eq!(
        registry.describe_all(),
        vec![
            ("zeta", "Quote a price"),
            ("manual_tool", "A manually implemented tool."),
            ("alpha", "Quote a price"),
        ]
    );
    let definitions = registry.definitions();
    assert_eq!(definitions.len(), 3);
    let required = definitions[0].parameters["required"].as_array().unwrap();
    assert_eq!(required.len(), 2);
    assert!(required.contains(&serde_json::json!("origin")));
}

#[tokio::test]
async fn execute_unknown_tool_fails() {
    let registry = ToolRegistry::new();
    let err = registry
        .execute("missing", serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(err.is_unknown_tool());
}

// ─────────────────────────────────────────────────────────────────────
// 4. Toolsets
// ─────────────────────────────────────────────────────────────────────

struct QuoteTools;

impl Toolset for QuoteTools {
    fn tools(self) -> Vec<Box<dyn Tool>> {
        vec![
            Box::new(price_tool("quote_a")) as Box<dyn Tool>,
            Box::new(price_tool("quote_b")),
        ]
    }
}

#[test]
fn toolset_registers_every_tool() {
    let mut registry = ToolRegistry::new();
    registry.register_toolset(QuoteTools).unwrap();
    assert_eq!(registry.names(), vec!["quote_a", "quote_b"]);
}

#[test]
fn toolset_conflict_registers_nothing() {
    let mut registry = ToolRegistry::new();
    registry.register(price_tool("quote_b")).unwrap();

    let err = registry.register_toolset(QuoteTools).unwrap_err();
    assert!(matches!(err, ToolError::DuplicateTool(ref name) if name == "quote_b"));
    assert_eq!(registry.names(), vec!["quote_b"]);
}

#[test]
fn toolset_with_internal_duplicate_is_rejected() {
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(ManualTool) as Box<dyn Tool>, Box::new(ManualTool)];
    let mut registry = ToolRegistry::new();
    assert!(registry.register_toolset(tools).is_err());
    assert!(registry.is_empty());
}
