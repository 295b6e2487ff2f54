// ABOUTME: Tool module - defines tools, their arguments and results, and the registry.
// ABOUTME: Core abstraction for agent capabilities.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;
