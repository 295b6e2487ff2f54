// ABOUTME: Library half of the agentcore HTTP server.
// ABOUTME: Exposes the router so tests can drive it without a socket.

pub mod api;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
