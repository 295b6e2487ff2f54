// ABOUTME: Agent module - the orchestrator, its plan, and the run report.
// ABOUTME: AgentClient::run is the single entry point.

mod client;
mod plan;
mod report;

pub use client::{AgentClient, DEFAULT_MODEL_ID};
pub use plan::{FIXED_PLAN, Plan};
pub use report::{REPORT_SUFFIX, RunReport, summarize};

#[cfg(test)]
mod client_test;
