// ABOUTME: Defines the Tool trait - a named, synchronous capability the
// ABOUTME: orchestrator can invoke - and FnTool, a closure-backed Tool.

use std::fmt;

use super::{ArgsBundle, ToolResult};

/// A tool that can be invoked by the orchestrator.
///
/// Tools are pure: they must not block, fail, or hold mutable state, so a
/// single instance can be shared across concurrent runs.
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description.
    fn description(&self) -> &str {
        ""
    }

    /// Invoke the tool with the run's argument bundle.
    fn invoke(&self, args: &ArgsBundle) -> ToolResult;
}

type ToolFn = dyn Fn(&ArgsBundle) -> String + Send + Sync;

/// A tool backed by a plain function or closure.
///
/// The closure supplies only the outcome text; the result is always tagged
/// with the tool's own name.
pub struct FnTool {
    name: String,
    func: Box<ToolFn>,
}

impl FnTool {
    /// Wrap `func` as a tool called `name`.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&ArgsBundle) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, args: &ArgsBundle) -> ToolResult {
        ToolResult::new(self.name.as_str(), args, (self.func)(args))
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool").field("name", &self.name).finish()
    }
}
