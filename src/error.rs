// ABOUTME: Defines error types for agentcore using thiserror.
// ABOUTME: Only configuration can fail; runs and tools are total.

/// Top-level error type for agentcore.
#[derive(Debug, thiserror::Error)]
pub enum AgentCoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}
