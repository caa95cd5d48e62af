//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod proxy;

// Re-export the main handler for convenience
pub use handler::{ApiState, handler, route_event};
