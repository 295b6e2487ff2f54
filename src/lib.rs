// ABOUTME: Root module for agentcore - a stub agent orchestrator.
// ABOUTME: Re-exports the public types from submodules.

pub mod agent;
pub mod config;
pub mod error;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use agent::{AgentClient, RunReport};
pub use config::Config;
pub use error::AgentCoreError;
