// ABOUTME: Shared application state handed to every request handler.
// ABOUTME: Holds the one AgentClient the process serves requests with.

use std::sync::Arc;

use agentcore::AgentClient;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<AgentClient>,
}

impl AppState {
    pub fn new(agent: AgentClient) -> Self {
        Self {
            agent: Arc::new(agent),
        }
    }
}
