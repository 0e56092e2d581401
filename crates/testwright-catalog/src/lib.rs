//! Capability catalog and content resolution for Testwright.
//!
//! This crate holds the domain of the system: the fixed two-namespace
//! registry of workflow steps and reference documents, the candidate-root
//! file resolution behind it, and the MCP tool/prompt surfaces over both.
//!
//! # Modules
//!
//! - [`catalog`]: the Content Registry — `Catalog`, `CatalogEntry`,
//!   `EntryKind`, external-name addressing
//! - [`store`]: `ContentStore` — ordered candidate roots, first-success read
//! - [`envelope`]: directive-wrapping policy for workflow content
//! - [`service`]: `CapabilityService` — lookup → read → wrap dispatcher
//! - [`tools`]: `CatalogTools` — the catalog as MCP tools
//! - [`prompts`]: `CatalogPrompts` — the catalog as MCP prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use testwright_catalog::{Catalog, CapabilityService, CatalogTools, ContentStore};
//!
//! let service = Arc::new(CapabilityService::new(
//!     Catalog::builtin(),
//!     ContentStore::discover(),
//! ));
//! let tools = CatalogTools::new(service);
//! ```

pub mod catalog;
pub mod envelope;
pub mod prompts;
pub mod service;
pub mod store;
pub mod tools;

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, CatalogEntry, EntryKind, REFERENCE_PREFIX};
pub use envelope::{wrap, WORKFLOW_DIRECTIVE};
pub use prompts::CatalogPrompts;
pub use service::CapabilityService;
pub use store::{ContentStore, CONTENT_ROOT_ENV};
pub use tools::CatalogTools;
