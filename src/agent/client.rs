// ABOUTME: AgentClient - the orchestrator. Walks the fixed plan through the
// ABOUTME: injected tool registry and assembles a RunReport.

use serde_json::{Map, Value};
use tracing::{debug, info_span, warn};
use uuid::Uuid;

use super::report::summarize;
use super::{Plan, RunReport};
use crate::tool::{ArgsBundle, Registry};
use crate::tools::builtin_registry;

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL_ID: &str = "bedrock-model";

/// Runs tasks against a registry of tools.
///
/// `run` takes `&self` and touches no shared mutable state, so one client
/// can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct AgentClient {
    model_id: String,
    registry: Registry,
}

impl AgentClient {
    /// Create a client over the given registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            registry,
        }
    }

    /// Set the model identifier.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run a task through the fixed plan.
    ///
    /// Every registered tool in the plan receives the same arguments, and
    /// each result is tagged with the plan step that produced it. Plan
    /// steps with no registered tool are skipped and produce no result.
    pub fn run(&self, task: &str, params: Map<String, Value>) -> RunReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("agent_run", %run_id, model_id = %self.model_id);
        let _enter = span.enter();

        let plan = Plan::fixed();
        let args = ArgsBundle::new(task, params);

        let mut results = Vec::with_capacity(plan.len());
        for name in &plan {
            match self.registry.get(name) {
                Some(tool) => {
                    debug!(tool = %name, "invoking tool");
                    let mut result = tool.invoke(&args);
                    // Results carry the key the tool was found under.
                    result.tool.clone_from(name);
                    results.push(result);
                }
                None => warn!(tool = %name, "tool not registered, skipping"),
            }
        }

        let report = summarize(&plan, task);
        debug!(steps = plan.len(), results = results.len(), "run complete");

        RunReport {
            task: args.task,
            plan,
            results,
            report,
        }
    }
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new(builtin_registry())
    }
}
