// ABOUTME: HttpGetTool - stands in for an outbound HTTP fetch.
// ABOUTME: Returns a fixed "Fetched data (stub)" result tagged with its name.

use crate::tool::{ArgsBundle, Tool, ToolResult};

/// Simulate an HTTP GET request.
pub struct HttpGetTool;

impl Tool for HttpGetTool {
    fn name(&self) -> &str {
        "http_get"
    }

    fn description(&self) -> &str {
        "Simulate an HTTP GET request."
    }

    fn invoke(&self, args: &ArgsBundle) -> ToolResult {
        ToolResult::new(self.name(), args, "Fetched data (stub)")
    }
}
