// ABOUTME: SqlQueryTool - stands in for a database query.
// ABOUTME: Returns a fixed "Query executed (stub)" result tagged with its name.

use crate::tool::{ArgsBundle, Tool, ToolResult};

/// Simulate a SQL query.
pub struct SqlQueryTool;

impl Tool for SqlQueryTool {
    fn name(&self) -> &str {
        "sql_query"
    }

    fn description(&self) -> &str {
        "Simulate a SQL query."
    }

    fn invoke(&self, args: &ArgsBundle) -> ToolResult {
        ToolResult::new(self.name(), args, "Query executed (stub)")
    }
}
