// ABOUTME: RunReport - everything an agent run produced, returned to callers
// ABOUTME: and serialized verbatim by the HTTP layer.

use serde::{Deserialize, Serialize};

use super::Plan;
use crate::tool::ToolResult;

/// Trailing sentence of every report.
pub const REPORT_SUFFIX: &str = "This is a stub report summarising the actions taken.";

/// Outcome of one agent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// The task as submitted.
    pub task: String,

    /// The plan that was executed.
    pub plan: Plan,

    /// One result per plan step whose tool was registered, in plan order.
    pub results: Vec<ToolResult>,

    /// Human-readable summary.
    pub report: String,
}

/// Build the summary sentence for a run.
pub fn summarize(plan: &Plan, task: &str) -> String {
    format!("Executed plan {} for task '{}'. {}", plan, task, REPORT_SUFFIX)
}
