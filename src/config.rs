// ABOUTME: Runtime configuration read from the environment (and .env).
// ABOUTME: Covers the HTTP bind address and the agent's model id.

use std::net::SocketAddr;

use crate::agent::DEFAULT_MODEL_ID;
use crate::error::{AgentCoreError, ConfigError};

pub const BIND_VAR: &str = "AGENTCORE_BIND";
pub const MODEL_ID_VAR: &str = "AGENTCORE_MODEL_ID";
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,

    /// Model identifier handed to the agent client.
    pub model_id: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, AgentCoreError> {
        let _ = dotenvy::dotenv();
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind_raw.clone(),
                source,
            })?;

        let model_id = lookup(MODEL_ID_VAR).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        if model_id.trim().is_empty() {
            return Err(ConfigError::Empty(MODEL_ID_VAR));
        }

        Ok(Self { bind, model_id })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}
