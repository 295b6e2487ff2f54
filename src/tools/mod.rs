// ABOUTME: Built-in stub tools the default plan runs.
// ABOUTME: Each one ignores its input and reports a fixed outcome.

mod http_get;
mod sql_query;
mod ticket_create;

pub use http_get::HttpGetTool;
pub use sql_query::SqlQueryTool;
pub use ticket_create::TicketCreateTool;

use crate::tool::Registry;

/// Build a registry holding every built-in tool.
pub fn builtin_registry() -> Registry {
    Registry::new()
        .with(HttpGetTool)
        .with(SqlQueryTool)
        .with(TicketCreateTool)
}
