//! Calculator tool definition.
//!
//! A tool that applies one of four arithmetic operations to two numbers.
//! The arithmetic itself lives in [`calculate`], which returns a plain
//! `Result`; the tool boundary turns a [`CalculationError`] into an MCP error
//! result instead of failing the request.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument, warn};

use crate::domains::tools::error::CalculationError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the calculate tool.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CalculateParams {
    /// The operation to perform (add, subtract, multiply, divide).
    pub operation: String,

    /// First number.
    pub a: f64,

    /// Second number.
    pub b: f64,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a calculation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CalculationOutput {
    /// The result of the calculation.
    pub result: f64,
}

// ============================================================================
// Arithmetic
// ============================================================================

/// The operations understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to `a` and `b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculationError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                // -0.0 == 0.0, so both zeroes are rejected
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(CalculationError::unknown_operation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perform `operation` on `a` and `b`.
///
/// Fails with [`CalculationError::DivisionByZero`] when dividing by zero and
/// with [`CalculationError::UnknownOperation`] for any operation name other
/// than `add`, `subtract`, `multiply` or `divide`. Non-finite inputs follow
/// plain IEEE-754 arithmetic.
pub fn calculate(operation: &str, a: f64, b: f64) -> Result<f64, CalculationError> {
    operation.parse::<Operation>()?.apply(a, b)
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Calculate tool - four-operation arithmetic on two numbers.
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform a calculation on two numbers. \
        Parameters: operation - the operation to perform (add, subtract, multiply, divide); \
        a - first number; b - second number. Returns the result of the calculation.";

    /// Execute the tool logic and shape the MCP tool result.
    #[instrument(skip_all, fields(operation = %params.operation))]
    pub fn execute(params: &CalculateParams) -> CallToolResult {
        info!("Calculate tool called: {} {} {}", params.a, params.operation, params.b);

        match calculate(&params.operation, params.a, params.b) {
            Ok(result) => {
                let output = CalculationOutput { result };
                // Non-finite results have no JSON number form and become null.
                let structured = serde_json::to_value(&output)
                    .unwrap_or_else(|_| serde_json::json!({ "result": null }));
                let text = serde_json::Value::from(result).to_string();

                CallToolResult {
                    content: vec![Content::text(text)],
                    structured_content: Some(structured),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Calculation failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Decode tool-call arguments into [`CalculateParams`].
    pub fn parse_params(args: JsonObject) -> Result<CalculateParams, McpError> {
        serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CalculateParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CalculationOutput>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the route registered in the server's tool router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params = Self::parse_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params(operation: &str, a: f64, b: f64) -> CalculateParams {
        CalculateParams {
            operation: operation.to_string(),
            a,
            b,
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.as_str(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(calculate("add", 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(calculate("subtract", 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(calculate("multiply", 2.5, 4.0).unwrap(), 10.0);
        assert_eq!(calculate("divide", 10.0, 2.0).unwrap(), 5.0);
        assert_eq!(calculate("divide", 1.0, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_matches_native_arithmetic() {
        let pairs = [(0.1, 0.2), (-7.5, 3.0), (1e300, 1e-300), (-0.0, 42.0)];
        for (a, b) in pairs {
            assert_eq!(calculate("add", a, b).unwrap(), a + b);
            assert_eq!(calculate("subtract", a, b).unwrap(), a - b);
            assert_eq!(calculate("multiply", a, b).unwrap(), a * b);
            assert_eq!(calculate("divide", a, b).unwrap(), a / b);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        let err = calculate("divide", 1.0, 0.0).unwrap_err();
        assert!(matches!(err, CalculationError::DivisionByZero));
        assert_eq!(err.to_string(), "Cannot divide by zero");

        assert!(calculate("divide", 0.0, 0.0).is_err());
        assert!(calculate("divide", -3.0, -0.0).is_err());
    }

    #[test]
    fn test_zero_divisor_only_rejected_for_divide() {
        assert_eq!(calculate("multiply", 5.0, 0.0).unwrap(), 0.0);
        assert_eq!(calculate("add", 5.0, 0.0).unwrap(), 5.0);
    }

    #[test]
    fn test_unknown_operation() {
        let err = calculate("modulo", 5.0, 2.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: modulo");
        match err {
            CalculationError::UnknownOperation(op) => assert_eq!(op, "modulo"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_operation_names_are_exact() {
        assert!(calculate("Add", 1.0, 1.0).is_err());
        assert!(calculate(" add", 1.0, 1.0).is_err());
        assert!(calculate("", 1.0, 1.0).is_err());
    }

    #[test]
    fn test_unknown_operation_checked_before_divisor() {
        let err = calculate("modulo", 1.0, 0.0).unwrap_err();
        assert!(matches!(err, CalculationError::UnknownOperation(_)));
    }

    #[test]
    fn test_operation_display_round_trips() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_execute_success_result() {
        let result = CalculateTool::execute(&params("add", 2.0, 3.0));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "5.0");

        let structured = result
            .structured_content
            .expect("structured_content should exist");
        assert_eq!(structured["result"], 5.0);
    }

    #[test]
    fn test_execute_domain_errors() {
        let result = CalculateTool::execute(&params("divide", 1.0, 0.0));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Cannot divide by zero");
        assert!(result.structured_content.is_none());

        let result = CalculateTool::execute(&params("modulo", 5.0, 2.0));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Unknown operation: modulo");
    }

    #[test]
    fn test_execute_non_finite_result() {
        let result = CalculateTool::execute(&params("multiply", f64::MAX, 2.0));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "null");
    }

    #[test]
    fn test_parse_params() {
        let args = serde_json::json!({ "operation": "add", "a": 2, "b": 3.5 });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        let params = CalculateTool::parse_params(args).unwrap();
        assert_eq!(params.operation, "add");
        assert_eq!(params.a, 2.0);
        assert_eq!(params.b, 3.5);
    }

    #[test]
    fn test_parse_params_missing_field() {
        let args = serde_json::json!({ "operation": "add", "a": 2 });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        assert!(CalculateTool::parse_params(args).is_err());
    }

    #[test]
    fn test_parse_params_wrong_type() {
        let args = serde_json::json!({ "operation": "add", "a": "two", "b": 3 });
        let serde_json::Value::Object(args) = args else {
            unreachable!()
        };
        assert!(CalculateTool::parse_params(args).is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = CalculateTool::to_tool();
        assert_eq!(tool.name, "calculate");
        assert!(tool.output_schema.is_some());

        let properties = tool
            .input_schema
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("input schema should have properties");
        assert!(properties.contains_key("operation"));
        assert!(properties.contains_key("a"));
        assert!(properties.contains_key("b"));
    }

    #[test]
    fn test_structured_content_serialization() {
        let result = CalculateTool::execute(&params("divide", 10.0, 4.0));
        let serialized = serde_json::to_value(&result).unwrap();

        assert_eq!(serialized["structuredContent"]["result"], 2.5);
        assert_eq!(serialized["content"][0]["text"], "2.5");
    }
}
