//! Built-in MCP tools.
//!
//! Tools provided by the server infrastructure itself, independent of the
//! capability catalog.

pub mod health;

pub use health::{HealthResponse, HealthTools};
