// ABOUTME: Tests for AgentClient::run - plan shape, per-step results,
// ABOUTME: report text, and silent skipping of unregistered tools.

use serde_json::{Map, Value, json};

use super::*;
use crate::tool::{ArgsBundle, Registry, Tool, ToolResult};
use crate::tools::builtin_registry;

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_plan_is_fixed() {
    let client = AgentClient::default();

    for (task, p) in [
        ("", Map::new()),
        ("anything", params(json!({"a": [1, 2, 3]}))),
    ] {
        let report = client.run(task, p);
        assert_eq!(report.plan, Plan::fixed());
        assert_eq!(report.plan.steps(), FIXED_PLAN);
    }
}

#[test]
fn test_one_result_per_step() {
    let report = AgentClient::default().run("task", Map::new());

    assert_eq!(report.results.len(), report.plan.len());
    for (result, name) in report.results.iter().zip(report.plan.iter()) {
        assert_eq!(&result.tool, name);
    }
}

#[test]
fn test_every_tool_gets_same_args() {
    let p = params(json!({"priority": "high", "nested": {"x": null}}));
    let report = AgentClient::default().run("Check beds", p.clone());

    let expected = ArgsBundle::new("Check beds", p);
    assert!(report.results.iter().all(|r| r.args == expected));
}

#[test]
fn test_fixed_result_strings() {
    let report = AgentClient::default().run("t", Map::new());
    let outcomes: Vec<_> = report.results.iter().map(|r| r.result.as_str()).collect();

    assert_eq!(
        outcomes,
        vec![
            "Fetched data (stub)",
            "Query executed (stub)",
            "Ticket created (stub)"
        ]
    );
}

#[test]
fn test_schedule_mri_example() {
    let client = AgentClient::default();
    let report = client.run("Schedule MRI for patient 42", params(json!({"priority": "high"})));

    assert_eq!(
        serde_json::to_value(&report.results[0]).unwrap(),
        json!({
            "tool": "http_get",
            "args": {"task": "Schedule MRI for patient 42", "params": {"priority": "high"}},
            "result": "Fetched data (stub)"
        })
    );
    assert_eq!(
        report.report,
        "Executed plan ['http_get', 'sql_query', 'ticket_create'] for task \
         'Schedule MRI for patient 42'. This is a stub report summarising the actions taken."
    );
}

#[test]
fn test_report_contains_task_and_suffix() {
    let task = "Page on-call: it's urgent";
    let report = AgentClient::default().run(task, Map::new());

    assert_eq!(report.task, task);
    assert!(report.report.contains(task));
    assert!(report.report.ends_with(REPORT_SUFFIX));
}

#[test]
fn test_missing_tool_is_skipped() {
    let mut registry = builtin_registry();
    registry.unregister("sql_query");

    let report = AgentClient::new(registry).run("t", Map::new());

    assert_eq!(report.plan.len(), 3);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].tool, "http_get");
    assert_eq!(report.results[1].tool, "ticket_create");
    assert!(report.report.contains("'sql_query'"));
}

#[test]
fn test_empty_registry_yields_no_results() {
    let report = AgentClient::new(Registry::new()).run("t", Map::new());
    assert!(report.results.is_empty());
    assert_eq!(report.plan, Plan::fixed());
}

#[test]
fn test_tools_outside_plan_are_ignored() {
    let mut registry = builtin_registry();
    registry.register_fn("page_doctor", |_| "paged".to_string());

    let report = AgentClient::new(registry).run("t", Map::new());
    assert_eq!(report.results.len(), 3);
    assert!(report.results.iter().all(|r| r.tool != "page_doctor"));
}

#[test]
fn test_replaced_tool_is_used() {
    let mut registry = builtin_registry();
    registry.register_fn("sql_query", |_| "custom".to_string());

    let report = AgentClient::new(registry).run("t", Map::new());
    assert_eq!(report.results[1].result, "custom");
}

/// A tool whose results claim to come from some other tool.
struct MislabeledTool;

impl Tool for MislabeledTool {
    fn name(&self) -> &str {
        "sql_query"
    }

    fn invoke(&self, args: &ArgsBundle) -> ToolResult {
        ToolResult::new("http_get", args, "mislabeled")
    }
}

#[test]
fn test_results_tagged_with_registry_key() {
    let registry = builtin_registry().with(MislabeledTool);
    let report = AgentClient::new(registry).run("t", Map::new());

    assert_eq!(report.results[1].result, "mislabeled");
    for (result, name) in report.results.iter().zip(report.plan.iter()) {
        assert_eq!(&result.tool, name);
    }
}

#[test]
fn test_fn_tool_cannot_mislabel() {
    let mut registry = builtin_registry();
    registry.register_fn("sql_query", |args| format!("rows for {}", args.task));

    let report = AgentClient::new(registry).run("beds", Map::new());
    assert_eq!(report.results[1].tool, "sql_query");
    assert_eq!(report.results[1].result, "rows for beds");
}

#[test]
fn test_run_is_repeatable() {
    let client = AgentClient::default();
    let p = params(json!({"ward": 3}));

    assert_eq!(client.run("x", p.clone()), client.run("x", p));
}

#[test]
fn test_model_id() {
    assert_eq!(AgentClient::default().model_id(), DEFAULT_MODEL_ID);

    let client = AgentClient::default().with_model_id("anthropic.claude-v2");
    assert_eq!(client.model_id(), "anthropic.claude-v2");
    assert_eq!(client.registry().count(), 3);
}

#[test]
fn test_report_json_keys() {
    let value = serde_json::to_value(AgentClient::default().run("t", Map::new())).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    assert_eq!(keys, vec!["plan", "report", "results", "task"]);
}
