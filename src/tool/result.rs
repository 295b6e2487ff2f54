// ABOUTME: Defines ArgsBundle and ToolResult - the input handed to every tool
// ABOUTME: and the tagged record each tool returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments passed to a tool: the task text plus caller-supplied params.
///
/// Within one run the same bundle is handed to every tool in the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgsBundle {
    /// Natural language description of the task.
    pub task: String,

    /// Free-form key/value parameters from the caller.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ArgsBundle {
    /// Create a bundle from a task and its params.
    pub fn new(task: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            task: task.into(),
            params,
        }
    }
}

/// Result of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that produced this result.
    pub tool: String,

    /// The arguments the tool received.
    pub args: ArgsBundle,

    /// Descriptive outcome.
    pub result: String,
}

impl ToolResult {
    /// Create a result tagged with the producing tool's name.
    pub fn new(tool: impl Into<String>, args: &ArgsBundle, result: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            args: args.clone(),
            result: result.into(),
        }
    }
}
