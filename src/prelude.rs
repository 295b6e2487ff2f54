// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use agentcore::prelude::*;` to get started quickly.

pub use crate::agent::{AgentClient, FIXED_PLAN, Plan, REPORT_SUFFIX, RunReport};
pub use crate::config::Config;
pub use crate::error::{AgentCoreError, ConfigError};
pub use crate::tool::{ArgsBundle, FnTool, Registry, Tool, ToolResult};
pub use crate::tools::{HttpGetTool, SqlQueryTool, TicketCreateTool, builtin_registry};
