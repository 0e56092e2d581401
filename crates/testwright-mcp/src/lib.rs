//! MCP server infrastructure for Testwright.
//!
//! This crate provides the server components that expose Testwright
//! capabilities via the Model Context Protocol.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     testwright-mcp                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool registration and dispatch        │
//! │  CompositeRegistry — combine multiple tool sources          │
//! │  PromptSource trait — prompt listing and resolution         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestwrightMcpServer — stdio server (impls ServerHandler)   │
//! │  ServerConfig — server metadata (name, version, notes)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  McpErrorExt — testwright_core::Error → rmcp::ErrorData     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Built-in tools:                                            │
//! │  └── health — server status and capability count            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use testwright_mcp::{CompositeRegistry, TestwrightMcpServer};
//!
//! let registry = CompositeRegistry::new()
//!     .add(catalog_tools)
//!     .add(health_tools);
//!
//! TestwrightMcpServer::new(registry)
//!     .with_name("testwright")
//!     .serve_stdio()
//!     .await?;
//! ```

pub mod error;
pub mod prompts;
pub mod registry;
pub mod server;
pub mod tools;

// Re-export the rmcp model so dependent crates build protocol values
// without pinning rmcp themselves.
pub use rmcp::model;

// Re-exports — registry
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};

// Re-exports — prompts
pub use prompts::{PromptResult, PromptSource};

// Re-exports — server
pub use server::{ServerConfig, TestwrightMcpServer};

// Re-exports — error
pub use error::{Error, McpErrorExt, Result};

// Re-exports — built-in tools
pub use tools::{HealthResponse, HealthTools};
