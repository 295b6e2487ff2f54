// ABOUTME: TicketCreateTool - stands in for opening a work order.
// ABOUTME: Returns a fixed "Ticket created (stub)" result tagged with its name.

use crate::tool::{ArgsBundle, Tool, ToolResult};

/// Simulate creating a ticket or work order.
pub struct TicketCreateTool;

impl Tool for TicketCreateTool {
    fn name(&self) -> &str {
        "ticket_create"
    }

    fn description(&self) -> &str {
        "Simulate creating a ticket or work order."
    }

    fn invoke(&self, args: &ArgsBundle) -> ToolResult {
        ToolResult::new(self.name(), args, "Ticket created (stub)")
    }
}
